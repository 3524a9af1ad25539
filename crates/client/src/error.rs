use heritage_core::collaborator::CollaboratorError;
use serde::Deserialize;

/// Errors from the heritage API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Heritage API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

/// The `{ "error", "code" }` body the server sends with failures.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl From<ClientError> for CollaboratorError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api { status: 401, .. } => CollaboratorError::Unauthenticated,
            ClientError::Api { status, body } => {
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .map(|b| b.error)
                    .unwrap_or(body);
                CollaboratorError::Rejected { status, message }
            }
            ClientError::Request(e) => CollaboratorError::Unavailable(e.to_string()),
            ClientError::Config(msg) => CollaboratorError::Unavailable(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn unauthorized_status_means_unauthenticated() {
        let err = ClientError::Api {
            status: 401,
            body: "{}".to_string(),
        };
        assert_eq!(
            CollaboratorError::from(err),
            CollaboratorError::Unauthenticated
        );
    }

    #[test]
    fn error_field_is_lifted_from_json_body() {
        let err = ClientError::Api {
            status: 403,
            body: r#"{"error":"Admin role required","code":"FORBIDDEN"}"#.to_string(),
        };
        assert_matches!(
            CollaboratorError::from(err),
            CollaboratorError::Rejected { status: 403, message } if message == "Admin role required"
        );
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let err = ClientError::Api {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_matches!(
            CollaboratorError::from(err),
            CollaboratorError::Rejected { status: 502, message } if message == "Bad Gateway"
        );
    }
}
