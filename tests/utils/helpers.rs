/// Test helper functions and service builders
use chrono::{DateTime, TimeZone, Utc};
use restaurant_reviews::shared::utils::logger::init_logger;
use restaurant_reviews::{
    InMemoryRestaurantRepository, ManualClock, RestaurantRepository, ReviewConfig, ReviewService,
};
use std::sync::Arc;

use super::factories::RestaurantFactory;

pub struct TestServices {
    pub review_service: Arc<ReviewService>,
    pub restaurant_repository: Arc<InMemoryRestaurantRepository>,
    pub clock: Arc<ManualClock>,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Review service over an empty in-memory store and a clock frozen at
/// [`start_time`]
pub fn build_test_services() -> TestServices {
    build_test_services_with(ReviewConfig::default())
}

pub fn build_test_services_with(config: ReviewConfig) -> TestServices {
    init_logger();

    let restaurant_repository = Arc::new(InMemoryRestaurantRepository::new());
    let clock = Arc::new(ManualClock::new(start_time()));

    let review_service = Arc::new(ReviewService::new(
        restaurant_repository.clone(),
        clock.clone(),
        config,
    ));

    TestServices {
        review_service,
        restaurant_repository,
        clock,
    }
}

/// Store a fresh restaurant and return its id
pub async fn seed_restaurant(services: &TestServices, name: &str) -> String {
    let restaurant = RestaurantFactory::named(name);
    services
        .restaurant_repository
        .save(restaurant)
        .await
        .unwrap()
        .id
}

pub async fn average_rating(services: &TestServices, restaurant_id: &str) -> f32 {
    services
        .restaurant_repository
        .find_by_id(restaurant_id)
        .await
        .unwrap()
        .unwrap()
        .average_rating()
}
