/// Pagination support for queries
///
/// Pages are zero-based: page `n` starts at offset `n * page_size`.
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 20,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        self.page as usize * self.page_size as usize
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = if params.page_size == 0 {
            0
        } else {
            total_count.div_ceil(params.page_size as u64) as u32
        };

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }

    /// Slice an already ordered, fully materialized collection into a page.
    ///
    /// An offset at or past the end yields an empty page that still reports
    /// the full count.
    pub fn from_items(all: Vec<T>, params: &PaginationParams) -> Self {
        let total = all.len();
        let start = params.offset();

        if start >= total {
            return Self::new(Vec::new(), total as u64, params);
        }

        let end = start.saturating_add(params.limit()).min(total);
        let items = all.into_iter().skip(start).take(end - start).collect();

        Self::new(items, total as u64, params)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
