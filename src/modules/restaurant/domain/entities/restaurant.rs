use serde::{Deserialize, Serialize};

use crate::modules::restaurant::domain::services::rating_calculator::RatingCalculator;
use crate::modules::review::domain::{Review, User};

/// Restaurant aggregate root
///
/// Reviews only exist inside their restaurant, and `average_rating` is kept
/// equal to the mean of the embedded ratings by every mutating method that
/// goes through [`Restaurant::recompute_average_rating`]. Deserialization
/// ignores any incoming `averageRating` and derives it from the reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RestaurantRecord")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    reviews: Vec<Review>,
    average_rating: f32,
    /// Optimistic concurrency token, bumped by the store on every save
    #[serde(default)]
    pub version: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestaurantRecord {
    id: String,
    name: String,
    #[serde(default)]
    reviews: Vec<Review>,
    #[serde(default)]
    version: u64,
}

impl From<RestaurantRecord> for Restaurant {
    fn from(record: RestaurantRecord) -> Self {
        let mut restaurant = Restaurant::new(record.id, record.name).with_reviews(record.reviews);
        restaurant.version = record.version;
        restaurant
    }
}

impl Restaurant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            reviews: Vec::new(),
            average_rating: 0.0,
            version: 0,
        }
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self.recompute_average_rating();
        self
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn into_reviews(self) -> Vec<Review> {
        self.reviews
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn average_rating(&self) -> f32 {
        self.average_rating
    }

    pub fn find_review(&self, review_id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == review_id)
    }

    pub fn review_mut(&mut self, review_id: &str) -> Option<&mut Review> {
        self.reviews.iter_mut().find(|r| r.id == review_id)
    }

    pub fn has_review_by(&self, user: &User) -> bool {
        self.reviews.iter().any(|r| r.is_authored_by(user))
    }

    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
        self.recompute_average_rating();
    }

    /// Remove exactly the review with this id, keeping every other review
    pub fn remove_review(&mut self, review_id: &str) -> bool {
        let original_len = self.reviews.len();
        self.reviews.retain(|r| r.id != review_id);

        let removed = self.reviews.len() < original_len;
        if removed {
            self.recompute_average_rating();
        }
        removed
    }

    pub fn recompute_average_rating(&mut self) {
        self.average_rating = RatingCalculator::average(&self.reviews);
    }
}
