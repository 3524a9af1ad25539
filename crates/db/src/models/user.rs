//! User row model and upsert DTO.

use heritage_core::collaborator::Identity;
use heritage_core::types::Timestamp;
use heritage_core::users::UserRecord;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            created_at: Some(row.created_at),
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Values written by [`UserRepo::upsert`](crate::repositories::UserRepo::upsert).
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UpsertUser {
    pub fn new(identity: &Identity, role: &str) -> Self {
        let profile = UserRecord::from_identity(identity, role);
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            role: profile.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_takes_profile_from_identity() {
        let identity = Identity {
            uid: "uid-3".to_string(),
            display_name: Some("Nimal".to_string()),
            email: None,
        };
        let dto = UpsertUser::new(&identity, "admin");
        assert_eq!(dto.id, "uid-3");
        assert_eq!(dto.name, "Nimal");
        assert_eq!(dto.email, "");
        assert_eq!(dto.role, "admin");
    }
}
