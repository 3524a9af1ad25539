//! Row structs and insert DTOs.

pub mod story;
pub mod user;
