use serde::{Deserialize, Serialize};

use crate::modules::review::domain::ReviewSort;
use crate::shared::application::pagination::PaginationParams;
use crate::shared::config::ReviewConfig;

/// Page and ordering for a review listing
///
/// `sort: None` means newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReviewsQuery {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub sort: Option<ReviewSort>,
}

impl ListReviewsQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            pagination: PaginationParams::new(page, page_size),
            sort: None,
        }
    }

    /// First page at the configured default size, unsorted
    pub fn first_page(config: &ReviewConfig) -> Self {
        Self::new(0, config.default_page_size)
    }

    pub fn sorted_by(mut self, sort: ReviewSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn effective_sort(&self) -> ReviewSort {
        self.sort.unwrap_or_default()
    }
}
