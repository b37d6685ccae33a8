pub mod movies;
pub mod ratings;
pub mod users;
