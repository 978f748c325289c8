pub mod restaurant;
pub mod review;
