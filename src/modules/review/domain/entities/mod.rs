pub mod photo;
pub mod review;
pub mod user;

pub use photo::Photo;
pub use review::Review;
pub use user::{IdentityClaims, User};
