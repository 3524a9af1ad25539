pub mod admin;
pub mod health;
pub mod stories;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /stories                          list approved (public), submit (auth)
/// /stories/browse                   filtered window of approved stories
/// /users/me                         register own profile (auth)
///
/// /admin/stories                    all stories with search (admin only)
/// /admin/stories/{id}               delete (admin only)
/// /admin/stories/{id}/approve       approve (admin only)
/// /admin/users                      all users with search (admin only)
/// /admin/users/{id}                 delete (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/stories", stories::router())
        .nest("/users", users::router())
        .nest("/admin", admin::router())
}
