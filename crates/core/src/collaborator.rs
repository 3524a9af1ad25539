//! Interfaces to the external identity provider and story store.
//!
//! The core never talks to a network or database directly. Production
//! implementations live in the `client` crate; tests use in-memory fakes.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::story::StoryRecord;
use crate::submission::SubmissionPayload;

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    /// The service could not be reached or did not answer in time.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with a non-success status.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The credential was missing, expired, or refused.
    #[error("Not authenticated")]
    Unauthenticated,
}

/// A signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    /// Name stamped on submissions: display name, else email, else empty.
    pub fn user_name(&self) -> String {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Source of the live identity and short-lived bearer tokens.
pub trait IdentityProvider: Send + Sync {
    /// The currently signed-in user, if any.
    fn current_identity(
        &self,
    ) -> impl Future<Output = Result<Option<Identity>, CollaboratorError>> + Send;

    /// A fresh bearer token for `identity`.
    fn id_token(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<String, CollaboratorError>> + Send;
}

/// Read and create access to stored stories.
pub trait StoryRepository: Send + Sync {
    fn fetch_stories(
        &self,
    ) -> impl Future<Output = Result<Vec<StoryRecord>, CollaboratorError>> + Send;

    fn create_story(
        &self,
        payload: &SubmissionPayload,
        credential: &str,
    ) -> impl Future<Output = Result<(), CollaboratorError>> + Send;
}

/// Administrator actions on stored stories.
pub trait StoryModeration: Send + Sync {
    fn approve_story(
        &self,
        id: &str,
        credential: &str,
    ) -> impl Future<Output = Result<(), CollaboratorError>> + Send;

    fn delete_story(
        &self,
        id: &str,
        credential: &str,
    ) -> impl Future<Output = Result<(), CollaboratorError>> + Send;
}
