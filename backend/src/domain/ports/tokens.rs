//! Driving port for token issue and verification.

use async_trait::async_trait;

use crate::domain::auth::BasicCredentials;
use crate::domain::error::Error;
use crate::domain::token::{AccessToken, TokenValue};
use crate::domain::user::User;

/// Domain use-case port for access-token credential flows.
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Verify basic-auth credentials and return a token for the user.
    ///
    /// A stored token with more than the reuse window of validity left is
    /// returned unchanged; otherwise a fresh token is minted and persisted.
    async fn issue(&self, credentials: &BasicCredentials) -> Result<AccessToken, Error>;

    /// Resolve a presented bearer token to its user.
    ///
    /// Expired and unknown tokens are rejected alike.
    async fn authenticate(&self, token: &TokenValue) -> Result<User, Error>;
}
