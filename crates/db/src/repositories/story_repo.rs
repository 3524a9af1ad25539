//! Repository for the `stories` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::story::{CreateStory, StoryRow};

/// Column list for `stories` queries.
const STORY_COLUMNS: &str = "\
    id, title, description, category, language, region, time_period, \
    risk_level, risk_score, approved, user_id, user_name, tags, \
    created_at, updated_at";

/// Provides persistence operations for stories.
pub struct StoryRepo;

impl StoryRepo {
    /// Insert a new, unapproved story with a fresh UUID v7 id.
    pub async fn create(pool: &PgPool, input: &CreateStory) -> Result<StoryRow, sqlx::Error> {
        let id = Uuid::now_v7().to_string();
        let query = format!(
            "INSERT INTO stories \
                 (id, title, description, category, language, region, time_period, \
                  risk_level, risk_score, user_id, user_name, tags) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {STORY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, StoryRow>(&query)
            .bind(&id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.language)
            .bind(&input.region)
            .bind(&input.time_period)
            .bind(&input.risk_level)
            .bind(input.risk_score)
            .bind(&input.user_id)
            .bind(&input.user_name)
            .bind(&input.tags)
            .fetch_one(pool)
            .await?;
        tracing::debug!(story_id = %row.id, user_id = %row.user_id, "Story inserted");
        Ok(row)
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<StoryRow>, sqlx::Error> {
        let query = format!("SELECT {STORY_COLUMNS} FROM stories WHERE id = $1");
        sqlx::query_as::<_, StoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Approved stories, newest first.
    pub async fn list_approved(pool: &PgPool) -> Result<Vec<StoryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {STORY_COLUMNS} FROM stories \
             WHERE approved = TRUE \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, StoryRow>(&query).fetch_all(pool).await
    }

    /// Every story regardless of approval, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StoryRow>, sqlx::Error> {
        let query = format!("SELECT {STORY_COLUMNS} FROM stories ORDER BY created_at DESC");
        sqlx::query_as::<_, StoryRow>(&query).fetch_all(pool).await
    }

    /// Mark a story approved.
    ///
    /// Returns `None` if no story with the given id exists.
    pub async fn approve(pool: &PgPool, id: &str) -> Result<Option<StoryRow>, sqlx::Error> {
        let query = format!(
            "UPDATE stories SET approved = TRUE, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {STORY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, StoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        tracing::debug!(story_id = %id, found = row.is_some(), "Story approve");
        Ok(row)
    }

    /// Delete a story by id.
    ///
    /// Returns `true` if a story was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        tracing::debug!(story_id = %id, deleted, "Story delete");
        Ok(deleted)
    }
}
