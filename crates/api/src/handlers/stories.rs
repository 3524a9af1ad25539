//! Public story listing and authenticated submission.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use heritage_core::filter::apply_filters;
use heritage_core::pagination::Paginator;
use heritage_core::risk::assess_risk;
use heritage_core::story::StoryRecord;
use heritage_core::submission::StoryDraft;
use heritage_db::models::story::CreateStory;
use heritage_db::repositories::StoryRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::BrowseParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Digital reference count assumed for a fresh submission.
const NEW_STORY_DIGITAL_REFS: u32 = 0;

/// One window of the filtered browse list.
#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub stories: Vec<StoryRecord>,
    pub total: usize,
    pub visible_count: usize,
    pub has_more: bool,
}

async fn approved_records(state: &AppState) -> AppResult<Vec<StoryRecord>> {
    let rows = StoryRepo::list_approved(&state.pool).await?;
    Ok(rows.into_iter().map(StoryRecord::from).collect())
}

/// GET /api/v1/stories
///
/// All approved stories, newest first.
pub async fn list_stories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stories = approved_records(&state).await?;
    Ok(Json(DataResponse { data: stories }))
}

/// GET /api/v1/stories/browse
///
/// Approved stories narrowed by category, risk level, and minimum risk
/// score, then clipped to the requested window.
pub async fn browse_stories(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> AppResult<impl IntoResponse> {
    // Reject bad filters before touching the database.
    let filter = params.filter_state()?;
    let paginator = params
        .visible
        .map(Paginator::with_visible)
        .unwrap_or_default();

    let records = approved_records(&state).await?;
    let filtered = apply_filters(&records, &filter);
    let total = filtered.len();

    let page = BrowseResponse {
        stories: paginator
            .window(&filtered)
            .iter()
            .map(|s| (*s).clone())
            .collect(),
        total,
        visible_count: paginator.visible_count(),
        has_more: paginator.has_more(total),
    };

    Ok(Json(DataResponse { data: page }))
}

/// POST /api/v1/stories
///
/// Validate the draft, stamp the submitter from the token, assess risk, and
/// store the story unapproved.
pub async fn create_story(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(draft): Json<StoryDraft>,
) -> AppResult<impl IntoResponse> {
    let story = draft.validate()?;
    let payload = story.into_payload(&auth.identity);
    let risk = assess_risk(
        &payload.description,
        &payload.language,
        NEW_STORY_DIGITAL_REFS,
    );

    let row = StoryRepo::create(&state.pool, &CreateStory::new(payload, risk)).await?;

    tracing::info!(
        story_id = %row.id,
        user_id = %auth.identity.uid,
        risk_level = %row.risk_level,
        "Story submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: StoryRecord::from(row),
        }),
    ))
}
