//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{UpsertUser, UserRow};

/// Column list for `users` queries.
const USER_COLUMNS: &str = "id, name, email, role, created_at, updated_at";

/// Provides persistence operations for registered users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user, or refresh name, email and role of an existing one.
    pub async fn upsert(pool: &PgPool, input: &UpsertUser) -> Result<UserRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, name, email, role) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 email = EXCLUDED.email, \
                 role = EXCLUDED.role, \
                 updated_at = NOW() \
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .fetch_one(pool)
            .await?;
        tracing::debug!(user_id = %row.id, role = %row.role, "User upserted");
        Ok(row)
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All users, most recently registered first.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRow>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC");
        sqlx::query_as::<_, UserRow>(&query).fetch_all(pool).await
    }

    /// Delete a user by id. Their stories are kept.
    ///
    /// Returns `true` if a user was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        tracing::debug!(user_id = %id, deleted, "User delete");
        Ok(deleted)
    }
}
