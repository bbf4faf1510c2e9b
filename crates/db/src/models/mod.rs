pub mod actor;
pub mod genre;
pub mod movie;
pub mod oscar_award;
pub mod poster;
