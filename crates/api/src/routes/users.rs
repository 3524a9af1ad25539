//! Route definitions for the caller's own profile.

use axum::routing::put;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// PUT    /me    -> register_profile (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/me", put(users::register_profile))
}
