use crate::shared::errors::AppError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const MAX_CONTENT_LENGTH: usize = 5000;

pub struct Validator;

impl Validator {
    pub fn validate_review_content(content: &str) -> Result<(), AppError> {
        if content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Review content cannot be empty".to_string(),
            ));
        }
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Review content too long (max {} characters)",
                MAX_CONTENT_LENGTH
            )));
        }
        Ok(())
    }

    pub fn validate_rating(rating: u8) -> Result<(), AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::ValidationError(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }
        Ok(())
    }

    pub fn validate_photo_ids(photo_ids: &[String]) -> Result<(), AppError> {
        if let Some(position) = photo_ids.iter().position(|id| id.trim().is_empty()) {
            return Err(AppError::ValidationError(format!(
                "Photo reference at position {} is empty",
                position
            )));
        }
        Ok(())
    }

    pub fn validate_page_size(page_size: u32, max_page_size: u32) -> Result<(), AppError> {
        if page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > max_page_size {
            return Err(AppError::ValidationError(format!(
                "Page size cannot exceed {}",
                max_page_size
            )));
        }
        Ok(())
    }
}
