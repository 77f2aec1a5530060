pub mod poll_repository;
pub mod question_repository;

pub use poll_repository::*;
pub use question_repository::*;
