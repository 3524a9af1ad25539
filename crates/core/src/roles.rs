//! Well-known role name constants carried in bearer token claims.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CONTRIBUTOR: &str = "contributor";
