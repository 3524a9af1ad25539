//! Registered contributor profiles, as listed for administrators.

use serde::{Deserialize, Serialize};

use crate::collaborator::Identity;
use crate::types::{Timestamp, UserId};

/// One registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl UserRecord {
    /// Profile for a signed-in identity. Missing name or email become empty.
    pub fn from_identity(identity: &Identity, role: &str) -> Self {
        Self {
            id: identity.uid.clone(),
            name: identity.display_name.clone().unwrap_or_default(),
            email: identity.email.clone().unwrap_or_default(),
            role: role.to_string(),
            created_at: None,
        }
    }
}

/// Case-insensitive substring match on name or email.
///
/// An empty term matches every user.
pub fn search_users<'a>(users: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    let needle = term.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            needle.is_empty()
                || u.name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
        })
        .collect()
}
