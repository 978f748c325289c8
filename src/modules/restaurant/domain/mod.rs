pub mod entities;
pub mod repositories;
pub mod services;

// Re-exports for easy access
pub use entities::restaurant::Restaurant;
pub use repositories::restaurant_repository::RestaurantRepository;
pub use services::rating_calculator::RatingCalculator;
