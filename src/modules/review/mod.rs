pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{ListReviewsQuery, ReviewCreateUpdateRequest, ReviewService};
pub use domain::{
    IdentityClaims, Photo, Review, ReviewListing, ReviewSort, ReviewSortField, SortDirection, User,
};
