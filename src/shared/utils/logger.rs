use log::{debug, error, info, warn};
use std::sync::Once;
use std::time::Instant;

use crate::shared::errors::AppError;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("restaurant_reviews", log::LevelFilter::Debug) // More verbose for our crate
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log a review lifecycle operation against a restaurant
    pub fn review_operation(operation: &str, restaurant_id: &str, review_id: Option<&str>) {
        match review_id {
            Some(id) => info!("Review: {} {} on restaurant {}", operation, id, restaurant_id),
            None => debug!("Review: Starting {} on restaurant {}", operation, restaurant_id),
        }
    }

    /// Log aggregate persistence
    pub fn store_operation(operation: &str, restaurant_id: &str, duration_ms: u64) {
        info!(
            "Store: {} restaurant {} completed in {}ms",
            operation, restaurant_id, duration_ms
        );
    }

    /// Log a failed aggregate write, at warn for rule violations and at
    /// error for everything else
    pub fn store_failure(error: &AppError, restaurant_id: &str) {
        if error.is_business_error() {
            warn!("Store: save restaurant {} rejected: {}", restaurant_id, error);
        } else {
            error!("Store: save restaurant {} failed: {}", restaurant_id, error);
        }
    }
}

/// Millisecond wall-clock timer
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
