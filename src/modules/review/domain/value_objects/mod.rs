mod review_sort;

pub use review_sort::{ReviewSort, ReviewSortField, SortDirection};
