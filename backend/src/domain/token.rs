//! Access tokens minted per user by `GET /token`.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Token lifetime granted at issue time, in hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Remaining validity below which a stored token is rotated instead of
/// reused, in minutes.
pub const TOKEN_REUSE_WINDOW_MINUTES: i64 = 5;

/// Validation errors raised when parsing a presented token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValidationError {
    /// Token was blank once trimmed.
    Empty,
}

impl fmt::Display for TokenValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "token must not be empty"),
        }
    }
}

impl std::error::Error for TokenValidationError {}

/// Opaque token string: 16 random bytes, hex-encoded.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenValue(String);

impl TokenValue {
    /// Generate a fresh random token value.
    pub fn generate() -> Self {
        let mut bytes = [0_u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Wrap a presented token value, enforcing the presence check.
    pub fn new(raw: impl Into<String>) -> Result<Self, TokenValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TokenValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Short SHA-256 fingerprint safe to write to logs.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(digest).chars().take(16).collect()
    }
}

impl fmt::Debug for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep the raw token out of debug logs; the fingerprint is enough
        // to correlate entries.
        write!(f, "TokenValue({})", self.fingerprint())
    }
}

/// An issued token together with its expiration instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: TokenValue,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Mint a fresh token valid for [`TOKEN_TTL_HOURS`] from `now`.
    pub fn issue(now: DateTime<Utc>) -> Self {
        Self {
            value: TokenValue::generate(),
            expires_at: now + Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Assemble a token from its parts.
    pub fn new(value: TokenValue, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    /// Token string presented by clients.
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Instant at which the token stops authenticating requests.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the token still authenticates requests at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Whether the token has enough life left to be reused by `GET /token`
    /// instead of being rotated.
    pub fn outlives_reuse_window(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now + Duration::minutes(TOKEN_REUSE_WINDOW_MINUTES)
    }
}
