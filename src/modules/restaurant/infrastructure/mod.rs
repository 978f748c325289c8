pub mod in_memory_restaurant_repository;

pub use in_memory_restaurant_repository::InMemoryRestaurantRepository;
