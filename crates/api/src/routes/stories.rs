//! Route definitions for public story endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::stories;
use crate::state::AppState;

/// Routes mounted at `/stories`.
///
/// ```text
/// GET    /          -> list_stories
/// POST   /          -> create_story (auth)
/// GET    /browse    -> browse_stories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stories::list_stories).post(stories::create_story))
        .route("/browse", get(stories::browse_stories))
}
