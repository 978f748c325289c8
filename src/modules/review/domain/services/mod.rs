pub mod review_listing;

pub use review_listing::ReviewListing;
