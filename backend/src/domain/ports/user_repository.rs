//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::password::PasswordHash;
use crate::domain::user::{EmailAddress, User, UserId, UserValidationError, Username, validated_text};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// A unique field value is already held by another user.
        Duplicate { field: String } => "user {field} is already taken",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Insertable user record; the repository assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login/display handle, validated non-empty.
    pub username: Username,
    /// Given name, trimmed non-empty.
    pub first_name: String,
    /// Family name, trimmed non-empty.
    pub last_name: String,
    /// Email address used for basic-auth lookups.
    pub email: EmailAddress,
    /// Pre-hashed password.
    pub password: PasswordHash,
    /// Creation timestamp supplied by the calling service's clock.
    pub date_added: DateTime<Utc>,
}

impl NewUser {
    /// Validate raw profile strings into an insertable record.
    pub fn try_new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: PasswordHash,
        date_added: DateTime<Utc>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            first_name: validated_text(first_name, UserValidationError::EmptyFirstName)?,
            last_name: validated_text(last_name, UserValidationError::EmptyLastName)?,
            email: EmailAddress::new(email)?,
            password,
            date_added,
        })
    }
}

/// Driven port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, assigning the next sequential identifier.
    ///
    /// Fails with [`UserRepositoryError::Duplicate`] when the username or
    /// email is already held (compared case-insensitively).
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by email address, compared case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch the user holding the given access token value.
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Replace the stored record matching this user's identifier.
    ///
    /// Uniqueness of username and email against other users is re-checked.
    async fn update(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Remove a user; returns whether a record was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError>;
}
