//! HS256 bearer tokens.
//!
//! Tokens carry the submitter's identity in [`Claims`] so the server can
//! stamp `user_id` and `user_name` itself instead of trusting the body.

use heritage_core::collaborator::Identity;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every bearer token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject -- the identity provider's user id.
    pub sub: String,
    /// Display name, if the user has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role name (`"admin"` or `"contributor"`).
    pub role: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        Identity {
            uid: self.sub.clone(),
            display_name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in minutes (default: 60).
    pub expiry_mins: i64,
}

/// Default token expiry in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `JWT_SECRET`      | **yes**  | --      |
    /// | `JWT_EXPIRY_MINS` | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_mins: i64 = std::env::var("JWT_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            expiry_mins,
        }
    }
}

/// Sign a token for `identity` with the given role.
pub fn generate_token(
    identity: &Identity,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: identity.uid.clone(),
        name: identity.display_name.clone(),
        email: identity.email.clone(),
        role: role.to_string(),
        iat: now,
        exp: now + config.expiry_mins * 60,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Checks the signature and expiry.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_mins: 15,
        }
    }

    fn nimal() -> Identity {
        Identity {
            uid: "uid-42".to_string(),
            display_name: Some("Nimal Perera".to_string()),
            email: Some("nimal@example.com".to_string()),
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let config = test_config();
        let token =
            generate_token(&nimal(), "admin", &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, "uid-42");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.identity(), nimal());
    }

    #[test]
    fn test_identity_without_name_round_trips() {
        let config = test_config();
        let anonymous = Identity {
            uid: "uid-7".to_string(),
            display_name: None,
            email: None,
        };
        let token = generate_token(&anonymous, "contributor", &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.identity().user_name(), "");
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "uid-1".to_string(),
            name: None,
            email: None,
            role: "contributor".to_string(),
            iat: now - 600,
            exp: now - 300,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            expiry_mins: 15,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            expiry_mins: 15,
        };

        let token = generate_token(&nimal(), "contributor", &config_a).unwrap();
        assert!(validate_token(&token, &config_b).is_err());
    }
}
