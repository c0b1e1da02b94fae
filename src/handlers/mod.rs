pub mod pages;
pub mod posts;
pub mod users;
