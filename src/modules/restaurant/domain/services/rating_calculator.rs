use crate::modules::review::domain::Review;

/// Derives a restaurant's average rating from its current reviews
pub struct RatingCalculator;

impl RatingCalculator {
    /// Arithmetic mean of the ratings, or 0.0 when there are none
    pub fn average(reviews: &[Review]) -> f32 {
        if reviews.is_empty() {
            return 0.0;
        }

        let sum: f64 = reviews.iter().map(|r| f64::from(r.rating)).sum();
        (sum / reviews.len() as f64) as f32
    }
}
