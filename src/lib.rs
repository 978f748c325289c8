//! Restaurant reviews: one review per user per restaurant, a 48-hour edit
//! window, in-memory sorted listing and a derived average rating kept on the
//! restaurant aggregate.
pub mod modules;
pub mod shared;

pub use modules::restaurant::{InMemoryRestaurantRepository, Restaurant, RestaurantRepository};
pub use modules::review::{
    ListReviewsQuery, Photo, Review, ReviewCreateUpdateRequest, ReviewService, ReviewSort,
    ReviewSortField, SortDirection, User,
};
pub use shared::{AppError, AppResult, Clock, ManualClock, ReviewConfig, SystemClock};
