//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /stories                 -> list_all_stories
/// PUT    /stories/{id}/approve    -> approve_story
/// DELETE /stories/{id}            -> delete_story
/// GET    /users                   -> list_users
/// DELETE /users/{id}              -> delete_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stories", get(admin::list_all_stories))
        .route("/stories/{id}/approve", put(admin::approve_story))
        .route("/stories/{id}", delete(admin::delete_story))
        .route("/users", get(admin::list_users))
        .route("/users/{id}", delete(admin::delete_user))
}
