//! Driving ports for user registration and profile management.
//!
//! In hexagonal terms these are *driving* ports: inbound adapters call them
//! without knowing the backing infrastructure, which keeps HTTP handler
//! tests deterministic.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::user::{User, UserId};

/// Payload for registering a new user.
///
/// Fields are raw strings; the service applies the presence checks and
/// hashes the password.
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    /// Requested login/display handle.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address used for basic-auth lookups.
    pub email: String,
    /// Plaintext password to hash and store.
    pub password: String,
}

/// Whitelisted profile fields accepted by `PUT /users/{id}`.
///
/// Absent fields are left untouched; anything outside this whitelist is
/// ignored by the HTTP adapter.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    /// Replacement login/display handle.
    pub username: Option<String>,
    /// Replacement given name.
    pub first_name: Option<String>,
    /// Replacement family name.
    pub last_name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
    /// Replacement plaintext password, hashed before storage.
    pub password: Option<String>,
}

/// Domain use-case port for user mutations.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a new user and return the stored record.
    async fn register(&self, request: RegisterUserRequest) -> Result<User, Error>;

    /// Apply whitelisted profile updates; only the user themselves may do so.
    async fn update(
        &self,
        actor: UserId,
        id: UserId,
        request: UpdateUserRequest,
    ) -> Result<User, Error>;

    /// Remove a user and their ingredients; only the user themselves may do
    /// so.
    async fn delete(&self, actor: UserId, id: UserId) -> Result<(), Error>;
}

/// Domain use-case port for user lookups.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch a user by identifier.
    async fn get(&self, id: UserId) -> Result<User, Error>;
}
