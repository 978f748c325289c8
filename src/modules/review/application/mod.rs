pub mod dto;
pub mod service;

// Re-export commonly used types
pub use dto::{ListReviewsQuery, ReviewCreateUpdateRequest};
pub use service::ReviewService;
