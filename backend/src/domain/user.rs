//! User entity and its validated value types.
//!
//! Field validation is presence-only (trimmed, non-empty); the API does not
//! enforce any richer schema on profile fields.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::password::PasswordHash;
use crate::domain::token::AccessToken;

/// Validation errors raised when constructing user value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    /// Username was blank once trimmed.
    EmptyUsername,
    /// First name was blank once trimmed.
    EmptyFirstName,
    /// Last name was blank once trimmed.
    EmptyLastName,
    /// Email address was blank once trimmed.
    EmptyEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyFirstName => write!(f, "firstName must not be empty"),
            Self::EmptyLastName => write!(f, "lastName must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier, assigned sequentially by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) fn validated_text(
    value: impl Into<String>,
    error: UserValidationError,
) -> Result<String, UserValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_owned())
}

/// Login/display handle for the user.
///
/// ## Invariants
/// - trimmed and non-empty; uniqueness is case-insensitive and enforced by
///   the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        validated_text(username, UserValidationError::EmptyUsername).map(Self)
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email address used for basic-auth lookups.
///
/// ## Invariants
/// - trimmed and non-empty; uniqueness is case-insensitive and enforced by
///   the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        validated_text(email, UserValidationError::EmptyEmail).map(Self)
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application user owning shopping-list ingredients.
///
/// ## Invariants
/// - profile fields are trimmed and non-empty (constructed through
///   [`Username`], [`EmailAddress`], and the validating setters);
/// - the password is only ever stored as an argon2 hash;
/// - `token`, once issued, stays valid until its stored expiration.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    username: Username,
    first_name: String,
    last_name: String,
    email: EmailAddress,
    password: PasswordHash,
    date_added: DateTime<Utc>,
    token: Option<AccessToken>,
}

impl User {
    /// Assemble a user from already-validated components.
    pub fn new(
        id: UserId,
        username: Username,
        first_name: String,
        last_name: String,
        email: EmailAddress,
        password: PasswordHash,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            first_name,
            last_name,
            email,
            password,
            date_added,
            token: None,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login/display handle.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored password hash.
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    /// Creation timestamp.
    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }

    /// Most recently issued access token, if any.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Replace the username.
    pub fn set_username(&mut self, username: Username) {
        self.username = username;
    }

    /// Replace the given name, enforcing the presence check.
    pub fn set_first_name(
        &mut self,
        first_name: impl Into<String>,
    ) -> Result<(), UserValidationError> {
        self.first_name = validated_text(first_name, UserValidationError::EmptyFirstName)?;
        Ok(())
    }

    /// Replace the family name, enforcing the presence check.
    pub fn set_last_name(
        &mut self,
        last_name: impl Into<String>,
    ) -> Result<(), UserValidationError> {
        self.last_name = validated_text(last_name, UserValidationError::EmptyLastName)?;
        Ok(())
    }

    /// Replace the email address.
    pub fn set_email(&mut self, email: EmailAddress) {
        self.email = email;
    }

    /// Replace the stored password hash.
    pub fn set_password(&mut self, password: PasswordHash) {
        self.password = password;
    }

    /// Attach a freshly issued access token.
    pub fn set_token(&mut self, token: AccessToken) {
        self.token = Some(token);
    }
}
