//! Password hashing and verification utilities
//!
//! Uses Argon2id with a random per-password salt. The PHC string that comes
//! out of hashing embeds algorithm, parameters and salt, so verification
//! needs nothing but the stored value.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chat_core::entities::User;

use crate::error::{AppError, AppResult};

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// A malformed hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Capability of entities that log in with a password
pub trait Authenticatable {
    /// Stored salted hash
    fn password_hash(&self) -> &str;

    /// Hash `password` and store the hash; the plaintext is not kept
    fn set_password(&mut self, password: &str) -> AppResult<()>;

    /// Check a candidate password against the stored hash
    fn check_password(&self, password: &str) -> bool {
        verify_password(password, self.password_hash())
    }
}

impl Authenticatable for User {
    fn password_hash(&self) -> &str {
        User::password_hash(self)
    }

    fn set_password(&mut self, password: &str) -> AppResult<()> {
        let hashed = hash_password(password)?;
        self.set_password_hash(hashed);
        Ok(())
    }
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> AppResult<String> {
        hash_password(password)
    }

    /// Verify a password against a hash
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        verify_password(password, hash)
    }

    /// Verify a password and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> AppResult<()> {
        if self.verify(password, hash) {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}
