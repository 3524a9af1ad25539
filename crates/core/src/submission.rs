//! Story creation form, validation, and submission.
//!
//! Validation is field-scoped: every failing field is reported at once so a
//! form can show all of its errors together. A valid draft is stamped with
//! the live identity and handed to the [`StoryRepository`] exactly once.
//! The form is cleared only after the store accepts the story; on any
//! failure it is left exactly as the user typed it.

use serde::{Deserialize, Serialize};

use crate::collaborator::{CollaboratorError, Identity, IdentityProvider, StoryRepository};
use crate::session::Session;
use crate::story::{Category, TimePeriod, DEFAULT_LANGUAGE};
use crate::tags::{TagInput, TagSet};

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

pub const FIELD_TITLE: &str = "title";
pub const FIELD_LANGUAGE: &str = "language";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_TIME_PERIOD: &str = "time_period";
pub const FIELD_DESCRIPTION: &str = "description";

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// All violations found in one draft. Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, thiserror::Error)]
#[error("{} field(s) failed validation", .violations.len())]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// The violation reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// Draft and validated story
// ---------------------------------------------------------------------------

/// Raw story fields as entered by a user or received over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryDraft {
    pub title: String,
    pub language: String,
    pub category: String,
    #[serde(alias = "timePeriod")]
    pub time_period: String,
    pub description: String,
    pub region: String,
    pub tags: Vec<String>,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStory {
    pub title: String,
    pub language: String,
    pub category: Category,
    pub time_period: TimePeriod,
    pub description: String,
    pub region: Option<String>,
    pub tags: TagSet,
}

impl StoryDraft {
    /// Check every required field and collect all violations.
    pub fn validate(&self) -> Result<NewStory, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(FIELD_TITLE, "Title is required");
        }

        let language = self.language.trim();
        if language.is_empty() {
            errors.push(FIELD_LANGUAGE, "Language is required");
        }

        let category = required_choice::<Category>(&self.category, FIELD_CATEGORY, "Category", &mut errors);
        let time_period =
            required_choice::<TimePeriod>(&self.time_period, FIELD_TIME_PERIOD, "Time Period", &mut errors);

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(FIELD_DESCRIPTION, "Description is required");
        }

        match (category, time_period) {
            (Some(category), Some(time_period)) if errors.is_empty() => {
                let region = self.region.trim();
                Ok(NewStory {
                    title: title.to_string(),
                    language: language.to_string(),
                    category,
                    time_period,
                    description: description.to_string(),
                    region: (!region.is_empty()).then(|| region.to_string()),
                    tags: TagSet::from_labels(&self.tags),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Parse a required enumerated field, recording a violation on failure.
fn required_choice<T>(raw: &str, field: &str, label: &str, errors: &mut ValidationErrors) -> Option<T>
where
    T: std::str::FromStr<Err = String>,
{
    let value = raw.trim();
    if value.is_empty() {
        errors.push(field, format!("{label} is required"));
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(message) => {
            errors.push(field, message);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Outbound payload
// ---------------------------------------------------------------------------

/// The object handed to the story store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub title: String,
    pub language: String,
    pub category: Category,
    #[serde(alias = "timePeriod")]
    pub time_period: TimePeriod,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub user_id: String,
    pub user_name: String,
}

impl NewStory {
    /// Build the payload, stamping the submitter from `identity`.
    pub fn into_payload(self, identity: &Identity) -> SubmissionPayload {
        SubmissionPayload {
            title: self.title,
            language: self.language,
            category: self.category,
            time_period: self.time_period,
            description: self.description,
            region: self.region,
            tags: self.tags.into_vec(),
            user_id: identity.uid.clone(),
            user_name: identity.user_name(),
        }
    }
}

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// State of the story creation form.
///
/// `user_id` and `user_name` may hold values captured before a session
/// change; they are never trusted and are overwritten at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryForm {
    pub title: String,
    pub language: String,
    pub category: String,
    pub time_period: String,
    pub description: String,
    pub region: String,
    pub tags: TagInput,
    pub user_id: String,
    pub user_name: String,
}

impl Default for StoryForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            category: String::new(),
            time_period: String::new(),
            description: String::new(),
            region: String::new(),
            tags: TagInput::new(),
            user_id: String::new(),
            user_name: String::new(),
        }
    }
}

impl StoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the user-editable fields.
    pub fn draft(&self) -> StoryDraft {
        StoryDraft {
            title: self.title.clone(),
            language: self.language.clone(),
            category: self.category.clone(),
            time_period: self.time_period.clone(),
            description: self.description.clone(),
            region: self.region.clone(),
            tags: self.tags.tags().as_slice().to_vec(),
        }
    }

    pub fn validate(&self) -> Result<NewStory, ValidationErrors> {
        self.draft().validate()
    }

    /// Back to the empty form: text cleared, language reset, no tags.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// One or more fields are invalid. Nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Nobody is signed in. Nothing was sent. Credential refusals from the
    /// identity provider or the store surface as [`SubmissionError::Failed`].
    #[error("You must be signed in to submit a story")]
    Unauthenticated,

    /// The identity provider or story store failed. Details are logged only.
    #[error("Failed to submit story. Please try again.")]
    Failed,
}

impl From<CollaboratorError> for SubmissionError {
    fn from(err: CollaboratorError) -> Self {
        tracing::error!(error = %err, "Story submission failed");
        SubmissionError::Failed
    }
}

/// Turns a filled-in [`StoryForm`] into one create request.
#[derive(Debug, Clone)]
pub struct SubmissionAssembler<R> {
    repository: R,
}

impl<R: StoryRepository> SubmissionAssembler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate, stamp, and send the form's story.
    ///
    /// Order is fixed: local validation, live identity, fresh token, then a
    /// single create call. The form is reset only when the create succeeds.
    pub async fn submit<P: IdentityProvider>(
        &self,
        form: &mut StoryForm,
        session: &mut Session<P>,
    ) -> Result<SubmissionPayload, SubmissionError> {
        let story = form.validate().inspect_err(|errors| {
            tracing::debug!(fields = ?errors.fields(), "Story form failed validation");
        })?;

        let identity = session
            .live_identity()
            .await?
            .ok_or(SubmissionError::Unauthenticated)?;

        let token = session.bearer_token(&identity).await?;

        let payload = story.into_payload(&identity);
        self.repository.create_story(&payload, &token).await?;

        tracing::info!(
            user_id = %payload.user_id,
            category = %payload.category,
            tags = payload.tags.len(),
            "Story submitted"
        );

        form.reset();
        Ok(payload)
    }
}
