use crate::log_debug;
use crate::shared::errors::{AppError, AppResult};
use chrono::Duration;
use std::env;

pub const EDIT_WINDOW_HOURS_VAR: &str = "REVIEW_EDIT_WINDOW_HOURS";
pub const DEFAULT_PAGE_SIZE_VAR: &str = "REVIEW_DEFAULT_PAGE_SIZE";
pub const MAX_PAGE_SIZE_VAR: &str = "REVIEW_MAX_PAGE_SIZE";

/// Tunables for the review lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// How long after original posting the author may still edit a review
    pub edit_window: Duration,

    /// Page size used when a listing request does not specify one
    pub default_page_size: u32,

    /// Largest page a single listing request may ask for
    pub max_page_size: u32,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            edit_window: Duration::hours(48),
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl ReviewConfig {
    /// Load configuration from the process environment (and `.env`, if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to the
    /// defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let edit_window = match lookup(EDIT_WINDOW_HOURS_VAR) {
            Some(raw) => Duration::hours(raw.trim().parse::<i64>()?),
            None => defaults.edit_window,
        };
        let default_page_size = match lookup(DEFAULT_PAGE_SIZE_VAR) {
            Some(raw) => raw.trim().parse::<u32>()?,
            None => defaults.default_page_size,
        };
        let max_page_size = match lookup(MAX_PAGE_SIZE_VAR) {
            Some(raw) => raw.trim().parse::<u32>()?,
            None => defaults.max_page_size,
        };

        let config = Self {
            edit_window,
            default_page_size,
            max_page_size,
        };
        config.validate()?;

        log_debug!(
            "Review config: edit window {}h, page size {} (max {})",
            config.edit_window.num_hours(),
            config.default_page_size,
            config.max_page_size
        );

        Ok(config)
    }

    pub fn with_edit_window(mut self, edit_window: Duration) -> Self {
        self.edit_window = edit_window;
        self
    }

    fn validate(&self) -> AppResult<()> {
        if self.edit_window < Duration::zero() {
            return Err(AppError::ValidationError(
                "Edit window cannot be negative".to_string(),
            ));
        }
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(AppError::ValidationError(
                "Page sizes must be positive".to_string(),
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(AppError::ValidationError(format!(
                "Default page size {} exceeds max page size {}",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}
