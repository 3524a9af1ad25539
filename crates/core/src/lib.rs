//! Domain logic for the heritage tracker.
//!
//! Everything in this crate is free of I/O: story filtering and pagination,
//! tag and form state, submission assembly, risk assessment, and moderation
//! helpers. Identity and persistence are reached only through the traits in
//! [`collaborator`].

pub mod browser;
pub mod collaborator;
pub mod error;
pub mod filter;
pub mod moderation;
pub mod pagination;
pub mod risk;
pub mod roles;
pub mod session;
pub mod story;
pub mod submission;
pub mod tags;
pub mod types;
pub mod users;
