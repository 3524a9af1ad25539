use std::time::Duration;

use crate::error::ClientError;

/// Default API base URL for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`HttpStoryStore`](crate::HttpStoryStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API server, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Load settings from environment variables.
    ///
    /// | Env Var                     | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `HERITAGE_API_URL`          | `http://localhost:3000` |
    /// | `HERITAGE_API_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url =
            std::env::var("HERITAGE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs = match std::env::var("HERITAGE_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ClientError::Config(format!(
                    "HERITAGE_API_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
