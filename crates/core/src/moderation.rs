//! Administrator review of submitted stories.
//!
//! [`ModerationQueue`] holds the admin's local copy of all stories. Approve
//! and purge go to the [`StoryModeration`] collaborator first; the local copy
//! changes only after the collaborator succeeds.

use crate::collaborator::{CollaboratorError, IdentityProvider, StoryModeration};
use crate::session::Session;
use crate::story::StoryRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModerationError {
    #[error("Story {0} not found")]
    NotFound(String),

    #[error("You must be signed in as an administrator")]
    Unauthenticated,

    #[error("Moderation action failed. Please try again.")]
    Failed,
}

impl From<CollaboratorError> for ModerationError {
    fn from(err: CollaboratorError) -> Self {
        match err {
            CollaboratorError::Unauthenticated => ModerationError::Unauthenticated,
            other => {
                tracing::error!(error = %other, "Moderation action failed");
                ModerationError::Failed
            }
        }
    }
}

/// Case-insensitive substring match on title or submitter name.
///
/// An empty term matches every story.
pub fn search_stories<'a>(stories: &'a [StoryRecord], term: &str) -> Vec<&'a StoryRecord> {
    let needle = term.trim().to_lowercase();
    stories
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.title.to_lowercase().contains(&needle)
                || s.user_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Number of stories still awaiting approval.
pub fn pending_count(stories: &[StoryRecord]) -> usize {
    stories.iter().filter(|s| !s.approved).count()
}

#[derive(Debug, Clone, Default)]
pub struct ModerationQueue {
    stories: Vec<StoryRecord>,
}

impl ModerationQueue {
    pub fn new(stories: Vec<StoryRecord>) -> Self {
        Self { stories }
    }

    pub fn stories(&self) -> &[StoryRecord] {
        &self.stories
    }

    pub fn search(&self, term: &str) -> Vec<&StoryRecord> {
        search_stories(&self.stories, term)
    }

    pub fn pending_count(&self) -> usize {
        pending_count(&self.stories)
    }

    pub async fn approve<M, P>(
        &mut self,
        moderation: &M,
        session: &mut Session<P>,
        id: &str,
    ) -> Result<(), ModerationError>
    where
        M: StoryModeration,
        P: IdentityProvider,
    {
        let index = self.position(id)?;
        let token = admin_token(session).await?;
        moderation.approve_story(id, &token).await?;
        self.stories[index].approved = true;
        tracing::info!(story_id = %id, "Story approved");
        Ok(())
    }

    pub async fn purge<M, P>(
        &mut self,
        moderation: &M,
        session: &mut Session<P>,
        id: &str,
    ) -> Result<(), ModerationError>
    where
        M: StoryModeration,
        P: IdentityProvider,
    {
        let index = self.position(id)?;
        let token = admin_token(session).await?;
        moderation.delete_story(id, &token).await?;
        self.stories.remove(index);
        tracing::info!(story_id = %id, "Story deleted");
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize, ModerationError> {
        self.stories
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ModerationError::NotFound(id.to_string()))
    }
}

async fn admin_token<P: IdentityProvider>(
    session: &mut Session<P>,
) -> Result<String, ModerationError> {
    let identity = session
        .live_identity()
        .await?
        .ok_or(ModerationError::Unauthenticated)?;
    Ok(session.bearer_token(&identity).await?)
}
