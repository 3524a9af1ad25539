//! REST client for the heritage story endpoints.

use heritage_core::collaborator::{CollaboratorError, StoryModeration, StoryRepository};
use heritage_core::story::StoryRecord;
use heritage_core::submission::SubmissionPayload;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// `{ "data": T }` envelope used by every successful response.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Body of `GET /api/v1/admin/stories`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminStories {
    pub stories: Vec<StoryRecord>,
    pub pending_count: usize,
}

/// HTTP client for one heritage API server.
#[derive(Debug, Clone)]
pub struct HttpStoryStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStoryStore {
    /// Build a client with the configured request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/api/v1/<segments>`, each segment percent-encoded so ids
    /// holding `/`, `?` or `#` stay one path segment.
    fn url(&self, segments: &[&str]) -> Result<reqwest::Url, ClientError> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            ClientError::Config(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::Config(format!("Base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);
        Ok(url)
    }

    /// `GET /api/v1/stories`: approved stories.
    pub async fn list_stories(&self) -> Result<Vec<StoryRecord>, ClientError> {
        let response = self.client.get(self.url(&["stories"])?).send().await?;
        Self::parse_data(response).await
    }

    /// `POST /api/v1/stories` with a bearer credential.
    pub async fn submit(
        &self,
        payload: &SubmissionPayload,
        credential: &str,
    ) -> Result<StoryRecord, ClientError> {
        let response = self
            .client
            .post(self.url(&["stories"])?)
            .bearer_auth(credential)
            .json(payload)
            .send()
            .await?;
        Self::parse_data(response).await
    }

    /// `GET /api/v1/admin/stories?search=`.
    pub async fn list_all_stories(
        &self,
        search: &str,
        credential: &str,
    ) -> Result<AdminStories, ClientError> {
        let response = self
            .client
            .get(self.url(&["admin", "stories"])?)
            .query(&[("search", search)])
            .bearer_auth(credential)
            .send()
            .await?;
        Self::parse_data(response).await
    }

    /// `PUT /api/v1/admin/stories/{id}/approve`.
    pub async fn approve(&self, id: &str, credential: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.url(&["admin", "stories", id, "approve"])?)
            .bearer_auth(credential)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// `DELETE /api/v1/admin/stories/{id}`.
    pub async fn delete(&self, id: &str, credential: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&["admin", "stories", id])?)
            .bearer_auth(credential)
            .send()
            .await?;
        Self::check_status(response).await
    }

    // ---- private helpers ----

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<Envelope<T>>().await?.data)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

impl StoryRepository for HttpStoryStore {
    async fn fetch_stories(&self) -> Result<Vec<StoryRecord>, CollaboratorError> {
        Ok(self.list_stories().await?)
    }

    async fn create_story(
        &self,
        payload: &SubmissionPayload,
        credential: &str,
    ) -> Result<(), CollaboratorError> {
        let record = self.submit(payload, credential).await?;
        tracing::debug!(story_id = %record.id, "Story stored");
        Ok(())
    }
}

impl StoryModeration for HttpStoryStore {
    async fn approve_story(&self, id: &str, credential: &str) -> Result<(), CollaboratorError> {
        Ok(self.approve(id, credential).await?)
    }

    async fn delete_story(&self, id: &str, credential: &str) -> Result<(), CollaboratorError> {
        Ok(self.delete(id, credential).await?)
    }
}
