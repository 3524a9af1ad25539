pub mod admin;
pub mod stories;
pub mod users;
