//! Administrator moderation of submitted stories and registered users.
//!
//! All endpoints require the admin role via [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use heritage_core::error::CoreError;
use heritage_core::moderation::{pending_count, search_stories};
use heritage_core::story::StoryRecord;
use heritage_core::users::{search_users, UserRecord};
use heritage_db::repositories::{StoryRepo, UserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AdminStoryList {
    pub stories: Vec<StoryRecord>,
    /// Unapproved stories across the whole table, ignoring `search`.
    pub pending_count: usize,
}

fn not_found(entity: &'static str, id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// GET /api/v1/admin/stories
pub async fn list_all_stories(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let records: Vec<StoryRecord> = StoryRepo::list_all(&state.pool)
        .await?
        .into_iter()
        .map(StoryRecord::from)
        .collect();

    let list = AdminStoryList {
        pending_count: pending_count(&records),
        stories: search_stories(&records, &params.search)
            .into_iter()
            .cloned()
            .collect(),
    };

    Ok(Json(DataResponse { data: list }))
}

/// PUT /api/v1/admin/stories/{id}/approve
pub async fn approve_story(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(story_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = StoryRepo::approve(&state.pool, &story_id)
        .await?
        .ok_or_else(|| not_found("Story", story_id.clone()))?;

    tracing::info!(story_id = %row.id, admin_id = %admin.identity.uid, "Story approved");

    Ok(Json(DataResponse {
        data: StoryRecord::from(row),
    }))
}

/// DELETE /api/v1/admin/stories/{id}
pub async fn delete_story(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(story_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !StoryRepo::delete(&state.pool, &story_id).await? {
        return Err(not_found("Story", story_id));
    }

    tracing::info!(story_id = %story_id, admin_id = %admin.identity.uid, "Story deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/users
///
/// Registered users, newest first, narrowed by `search` on name or email.
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let records: Vec<UserRecord> = UserRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(UserRecord::from)
        .collect();

    let users: Vec<UserRecord> = search_users(&records, &params.search)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DataResponse { data: users }))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Remove a user record. Stories they submitted are kept.
pub async fn delete_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !UserRepo::delete(&state.pool, &user_id).await? {
        return Err(not_found("User", user_id));
    }

    tracing::info!(user_id = %user_id, admin_id = %admin.identity.uid, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
