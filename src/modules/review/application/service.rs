use std::sync::Arc;

use super::dto::{ListReviewsQuery, ReviewCreateUpdateRequest};
use crate::modules::restaurant::domain::{Restaurant, RestaurantRepository};
use crate::modules::review::domain::{Review, ReviewListing, User};
use crate::shared::application::pagination::PaginatedResult;
use crate::shared::config::ReviewConfig;
use crate::shared::domain::Clock;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::utils::Validator;
use crate::{log_debug, log_error, log_warn};

/// Review lifecycle over the restaurant aggregate
///
/// Every operation loads the whole restaurant, mutates it in memory and saves
/// it back once. Conflicting concurrent writes are left to the repository.
pub struct ReviewService {
    restaurant_repo: Arc<dyn RestaurantRepository>,
    clock: Arc<dyn Clock>,
    config: ReviewConfig,
}

impl ReviewService {
    pub fn new(
        restaurant_repo: Arc<dyn RestaurantRepository>,
        clock: Arc<dyn Clock>,
        config: ReviewConfig,
    ) -> Self {
        Self {
            restaurant_repo,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    pub async fn create_review(
        &self,
        author: &User,
        restaurant_id: &str,
        request: ReviewCreateUpdateRequest,
    ) -> AppResult<Review> {
        LogContext::review_operation("create", restaurant_id, None);
        request.validate()?;

        let mut restaurant = self.get_restaurant_or_fail(restaurant_id).await?;

        if restaurant.has_review_by(author) {
            log_debug!(
                "User {} already reviewed restaurant {}",
                author.id,
                restaurant_id
            );
            return Err(AppError::NotAllowed(
                "User has already reviewed this restaurant.".to_string(),
            ));
        }

        let now = self.clock.now();
        let review = Review::post(
            author.clone(),
            request.content,
            request.rating,
            &request.photo_ids,
            now,
        );
        let review_id = review.id.clone();

        restaurant.add_review(review);

        let saved = self.save_restaurant(restaurant).await?;
        let created = Self::committed_review(&saved, &review_id, "created")?;

        LogContext::review_operation("created", restaurant_id, Some(&review_id));
        log_debug!(
            "Restaurant {} now has {} reviews, average {:.2}",
            restaurant_id,
            saved.review_count(),
            saved.average_rating()
        );
        Ok(created)
    }

    /// Sorted page of a restaurant's reviews; the ordering is not persisted
    pub async fn list_reviews(
        &self,
        restaurant_id: &str,
        query: &ListReviewsQuery,
    ) -> AppResult<PaginatedResult<Review>> {
        Validator::validate_page_size(query.pagination.page_size, self.config.max_page_size)?;

        let timer = TimedOperation::start();
        let restaurant = self.get_restaurant_or_fail(restaurant_id).await?;
        let sort = query.effective_sort();

        let page = ReviewListing::page(restaurant.into_reviews(), sort, &query.pagination);

        log_debug!(
            "Listed restaurant {} page {} sorted by {}: {} of {} in {}ms",
            restaurant_id,
            query.pagination.page,
            sort,
            page.items.len(),
            page.total_count,
            timer.elapsed_ms()
        );
        Ok(page)
    }

    /// A missing review is `None`; a missing restaurant is an error
    pub async fn get_review(&self, restaurant_id: &str, review_id: &str) -> AppResult<Option<Review>> {
        let restaurant = self.get_restaurant_or_fail(restaurant_id).await?;
        Ok(restaurant.find_review(review_id).cloned())
    }

    pub async fn update_review(
        &self,
        author: &User,
        restaurant_id: &str,
        review_id: &str,
        request: ReviewCreateUpdateRequest,
    ) -> AppResult<Review> {
        LogContext::review_operation("update", restaurant_id, None);
        request.validate()?;

        let mut restaurant = self.get_restaurant_or_fail(restaurant_id).await?;
        let now = self.clock.now();
        let window = self.config.edit_window;

        let review = restaurant
            .review_mut(review_id)
            .ok_or_else(|| AppError::NotAllowed(format!("Review {} does not exist", review_id)))?;

        if !review.is_authored_by(author) {
            log_warn!(
                "User {} ({}) attempted to edit review {} written by {}",
                author.display_name(),
                author.id,
                review_id,
                review.written_by.id
            );
            return Err(AppError::NotAllowed(
                "Cannot update another user's review".to_string(),
            ));
        }

        if !review.is_editable_at(now, window) {
            return Err(AppError::NotAllowed(format!(
                "Review can no longer be edited (editable until {})",
                review.editable_until(window)
            )));
        }

        review.revise(request.content, request.rating, &request.photo_ids, now);
        restaurant.recompute_average_rating();

        let saved = self.save_restaurant(restaurant).await?;
        let updated = Self::committed_review(&saved, review_id, "updated")?;

        LogContext::review_operation("updated", restaurant_id, Some(review_id));
        Ok(updated)
    }

    pub async fn delete_review(&self, restaurant_id: &str, review_id: &str) -> AppResult<()> {
        LogContext::review_operation("delete", restaurant_id, None);

        let mut restaurant = self.get_restaurant_or_fail(restaurant_id).await?;

        if !restaurant.remove_review(review_id) {
            return Err(AppError::NotAllowed(format!(
                "Review {} does not exist",
                review_id
            )));
        }

        let saved = self.save_restaurant(restaurant).await?;

        LogContext::review_operation("deleted", restaurant_id, Some(review_id));
        log_debug!(
            "Restaurant {} now has {} reviews, average {:.2}",
            restaurant_id,
            saved.review_count(),
            saved.average_rating()
        );
        Ok(())
    }

    async fn get_restaurant_or_fail(&self, restaurant_id: &str) -> AppResult<Restaurant> {
        self.restaurant_repo
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Restaurant with id not found: {}", restaurant_id))
            })
    }

    async fn save_restaurant(&self, restaurant: Restaurant) -> AppResult<Restaurant> {
        let restaurant_id = restaurant.id.clone();
        let timer = TimedOperation::start();

        let saved = self.restaurant_repo.save(restaurant).await.map_err(|e| {
            LogContext::store_failure(&e, &restaurant_id);
            e
        })?;

        LogContext::store_operation("save", &restaurant_id, timer.elapsed_ms());
        Ok(saved)
    }

    /// Read the review back out of the stored aggregate so callers see what
    /// was committed
    fn committed_review(saved: &Restaurant, review_id: &str, action: &str) -> AppResult<Review> {
        saved.find_review(review_id).cloned().ok_or_else(|| {
            log_error!(
                "Review {} missing from restaurant {} after save",
                review_id,
                saved.id
            );
            AppError::InternalError(format!("Error retrieving {} review {}", action, review_id))
        })
    }
}
