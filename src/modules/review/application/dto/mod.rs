pub mod list_reviews_query;
pub mod review_request;

pub use list_reviews_query::ListReviewsQuery;
pub use review_request::ReviewCreateUpdateRequest;
