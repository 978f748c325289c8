/// In-memory ordering and paging of a restaurant's reviews
///
/// The whole collection is materialized with the aggregate, so ordering and
/// slicing happen here rather than in the store.
use std::cmp::Ordering;

use crate::modules::review::domain::{Review, ReviewSort, ReviewSortField};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};

pub struct ReviewListing;

impl ReviewListing {
    /// Stable sort: equal keys keep their current relative order in both
    /// directions
    pub fn sort(reviews: &mut [Review], sort: ReviewSort) {
        let compare = Self::comparator(sort.field);

        if sort.direction.is_ascending() {
            reviews.sort_by(compare);
        } else {
            reviews.sort_by(|a, b| compare(b, a));
        }
    }

    pub fn page(
        mut reviews: Vec<Review>,
        sort: ReviewSort,
        params: &PaginationParams,
    ) -> PaginatedResult<Review> {
        Self::sort(&mut reviews, sort);
        PaginatedResult::from_items(reviews, params)
    }

    fn comparator(field: ReviewSortField) -> fn(&Review, &Review) -> Ordering {
        match field {
            ReviewSortField::DatePosted => |a: &Review, b: &Review| a.date_posted.cmp(&b.date_posted),
            ReviewSortField::Rating => |a: &Review, b: &Review| a.rating.cmp(&b.rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::review::domain::{SortDirection, User};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    fn review(author: &str, rating: u8, hours_after: i64) -> Review {
        Review::post(
            User::new(author),
            format!("review by {}", author),
            rating,
            &[],
            t0() + Duration::hours(hours_after),
        )
    }

    fn authors(reviews: &[Review]) -> Vec<&str> {
        reviews.iter().map(|r| r.written_by.id.as_str()).collect()
    }

    #[test]
    fn default_sort_is_newest_first() {
        let mut reviews = vec![review("t1", 3, 1), review("t3", 3, 3), review("t2", 3, 2)];
        ReviewListing::sort(&mut reviews, ReviewSort::default());
        assert_eq!(authors(&reviews), vec!["t3", "t2", "t1"]);
    }

    #[test]
    fn rating_ascending_and_descending() {
        let mut reviews = vec![review("a", 4, 0), review("b", 1, 1), review("c", 5, 2)];

        ReviewListing::sort(&mut reviews, ReviewSort::ascending(ReviewSortField::Rating));
        assert_eq!(authors(&reviews), vec!["b", "a", "c"]);

        ReviewListing::sort(
            &mut reviews,
            ReviewSort::new(ReviewSortField::Rating, SortDirection::Desc),
        );
        assert_eq!(authors(&reviews), vec!["c", "a", "b"]);
    }

    #[test]
    fn ties_keep_collection_order() {
        let mut reviews = vec![review("first", 3, 0), review("second", 3, 1), review("third", 3, 2)];

        ReviewListing::sort(&mut reviews, ReviewSort::descending(ReviewSortField::Rating));
        assert_eq!(authors(&reviews), vec!["first", "second", "third"]);
    }

    #[test]
    fn page_sorts_before_slicing() {
        let reviews = vec![review("a", 2, 0), review("b", 5, 1), review("c", 3, 2), review("d", 1, 3)];

        let page = ReviewListing::page(
            reviews,
            ReviewSort::ascending(ReviewSortField::Rating),
            &PaginationParams::new(1, 2),
        );

        assert_eq!(authors(&page.items), vec!["c", "b"]);
        assert_eq!(page.total_count, 4);
    }
}
