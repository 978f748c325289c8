// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod config; // Runtime configuration
pub mod domain; // Shared domain concepts (clock)
pub mod errors; // Shared error types
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use config::ReviewConfig;
pub use domain::{Clock, ManualClock, SystemClock};
pub use errors::{AppError, AppResult};
