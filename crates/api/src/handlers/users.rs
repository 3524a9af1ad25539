//! Profile registration for signed-in users.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use heritage_core::users::UserRecord;
use heritage_db::models::user::UpsertUser;
use heritage_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/users/me
///
/// Record the caller's profile from the token claims. Repeating the call
/// refreshes name, email and role.
pub async fn register_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let row = UserRepo::upsert(&state.pool, &UpsertUser::new(&auth.identity, &auth.role)).await?;

    tracing::info!(user_id = %row.id, role = %row.role, "User profile registered");

    Ok(Json(DataResponse {
        data: UserRecord::from(row),
    }))
}
