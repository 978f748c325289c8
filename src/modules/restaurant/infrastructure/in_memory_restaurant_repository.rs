use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::restaurant::domain::{Restaurant, RestaurantRepository};
use crate::shared::errors::{AppError, AppResult};

/// Process-local restaurant store with optimistic concurrency
///
/// Every save compares the incoming `version` with the stored one under the
/// map's entry lock, so two read-modify-write cycles on the same restaurant
/// cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRestaurantRepository {
    restaurants: Arc<DashMap<String, Restaurant>>,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Restaurant>> {
        let found = self.restaurants.get(id).map(|entry| entry.value().clone());
        debug!(restaurant_id = id, found = found.is_some(), "Loaded restaurant");
        Ok(found)
    }

    async fn save(&self, mut restaurant: Restaurant) -> AppResult<Restaurant> {
        match self.restaurants.entry(restaurant.id.clone()) {
            Entry::Occupied(mut entry) => {
                let stored_version = entry.get().version;
                if stored_version != restaurant.version {
                    warn!(
                        restaurant_id = %restaurant.id,
                        stored_version,
                        incoming_version = restaurant.version,
                        "Rejected stale restaurant write"
                    );
                    return Err(AppError::Conflict(format!(
                        "Restaurant {} was modified concurrently (stored version {}, got {})",
                        restaurant.id, stored_version, restaurant.version
                    )));
                }
                restaurant.version += 1;
                entry.insert(restaurant.clone());
            }
            Entry::Vacant(entry) => {
                if restaurant.version != 0 {
                    return Err(AppError::Conflict(format!(
                        "Restaurant {} no longer exists (got version {})",
                        restaurant.id, restaurant.version
                    )));
                }
                restaurant.version = 1;
                entry.insert(restaurant.clone());
            }
        }

        debug!(
            restaurant_id = %restaurant.id,
            version = restaurant.version,
            reviews = restaurant.review_count(),
            "Saved restaurant"
        );
        Ok(restaurant)
    }
}
