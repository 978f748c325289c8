pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{IdentityClaims, Photo, Review, User};
pub use services::ReviewListing;
pub use value_objects::{ReviewSort, ReviewSortField, SortDirection};
