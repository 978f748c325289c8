use async_trait::async_trait;

use crate::modules::restaurant::domain::entities::restaurant::Restaurant;
use crate::shared::errors::AppResult;

/// Port for loading and persisting whole restaurant aggregates
///
/// Implementations are responsible for detecting concurrent writes to the
/// same aggregate; the review service never locks or retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Find restaurant by ID, reviews included
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Restaurant>>;

    /// Persist the aggregate and return it as stored
    ///
    /// The returned value is authoritative; it may differ from the argument
    /// (at minimum its `version` changes).
    async fn save(&self, restaurant: Restaurant) -> AppResult<Restaurant>;
}
