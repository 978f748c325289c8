use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Payload for both creating and updating a review
///
/// `photo_ids` are the caller's photo references (URLs or upload ids); upload
/// timestamps are assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreateUpdateRequest {
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub photo_ids: Vec<String>,
}

impl ReviewCreateUpdateRequest {
    pub fn new(content: impl Into<String>, rating: u8) -> Self {
        Self {
            content: content.into(),
            rating,
            photo_ids: Vec::new(),
        }
    }

    pub fn with_photo(mut self, photo_id: impl Into<String>) -> Self {
        self.photo_ids.push(photo_id.into());
        self
    }

    pub fn with_photos<I, S>(mut self, photo_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.photo_ids.extend(photo_ids.into_iter().map(Into::into));
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_review_content(&self.content)?;
        Validator::validate_rating(self.rating)?;
        Validator::validate_photo_ids(&self.photo_ids)?;
        Ok(())
    }
}
