//! Explicit authentication session.
//!
//! A [`Session`] is created with [`Session::init`] when the application
//! starts and closed with [`Session::teardown`] on sign-out. Components that
//! need the current user receive the session by reference instead of reading
//! global state.

use crate::collaborator::{CollaboratorError, Identity, IdentityProvider};

#[derive(Debug)]
pub struct Session<P> {
    provider: P,
    identity: Option<Identity>,
    open: bool,
}

impl<P: IdentityProvider> Session<P> {
    /// Open a session and resolve whoever is currently signed in.
    pub async fn init(provider: P) -> Result<Self, CollaboratorError> {
        let identity = provider.current_identity().await?;
        tracing::debug!(
            uid = identity.as_ref().map(|i| i.uid.as_str()),
            "Session initialised"
        );
        Ok(Self {
            provider,
            identity,
            open: true,
        })
    }

    /// The identity seen at the last refresh. May be stale.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_authenticated(&self) -> bool {
        self.open && self.identity.is_some()
    }

    /// Ask the provider who is signed in right now and remember the answer.
    ///
    /// A torn-down session always reports nobody.
    pub async fn live_identity(&mut self) -> Result<Option<Identity>, CollaboratorError> {
        if !self.open {
            return Ok(None);
        }
        let identity = self.provider.current_identity().await?;
        self.identity = identity.clone();
        Ok(identity)
    }

    /// Fetch a fresh bearer token for `identity`.
    pub async fn bearer_token(&self, identity: &Identity) -> Result<String, CollaboratorError> {
        if !self.open {
            return Err(CollaboratorError::Unauthenticated);
        }
        self.provider.id_token(identity).await
    }

    /// Close the session on sign-out.
    pub fn teardown(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::info!(uid = %identity.uid, "Session closed");
        }
        self.open = false;
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
