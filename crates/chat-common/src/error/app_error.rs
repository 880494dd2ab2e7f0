//! Application error types
//!
//! Errors raised by password hashing and configuration loading, plus domain
//! errors passed through untouched. How they are presented is left to the
//! caller.

use chat_core::DomainError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
