//! Password hashing for stored credentials.
//!
//! Plaintext passwords never leave the registration/update path; only the
//! argon2id PHC string is stored and compared.

use std::fmt;

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash as PhcString, PasswordHasher as _, PasswordVerifier as _, SaltString,
    rand_core::OsRng,
};

/// Errors raised while hashing a plaintext password.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// The argon2 hasher rejected the input.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Stored argon2id password hash.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password with a fresh random salt.
    pub fn from_plaintext(plaintext: &str) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| PasswordHashError::Hash(err.to_string()))?;
        Ok(Self(hash.to_string()))
    }

    /// Check a candidate password against the stored hash.
    ///
    /// An undecodable stored hash counts as a mismatch rather than an error;
    /// the caller cannot repair it and must not be told which case occurred.
    pub fn verify(&self, candidate: &str) -> bool {
        match PhcString::new(&self.0) {
            Ok(parsed) => Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// The PHC-format hash string, for persistence adapters.
    pub fn as_phc_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep hash material out of debug logs.
        f.write_str("PasswordHash(..)")
    }
}
