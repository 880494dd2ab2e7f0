//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Image not found: {0}")]
    ImageNotFound(Id),

    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("Server not found: {0}")]
    ServerNotFound(Id),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Id),

    #[error("Message not found: {0}")]
    MessageNotFound(Id),

    #[error("Reaction not found: {0}")]
    ReactionNotFound(Id),

    // =========================================================================
    // Storage Constraint Violations
    // =========================================================================
    /// A unique constraint rejected the row (username, email, server or channel name)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A foreign key pointed at a row that does not exist
    #[error("Referenced row does not exist: {0}")]
    ReferenceViolation(String),

    /// A non-null column was left empty
    #[error("Missing required field: {0}")]
    MissingField(String),

    // =========================================================================
    // Data Errors
    // =========================================================================
    #[error("Unknown image type: {0}")]
    UnknownImageType(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ImageNotFound(_) => "UNKNOWN_IMAGE",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ServerNotFound(_) => "UNKNOWN_SERVER",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",

            // Constraints
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::ReferenceViolation(_) => "REFERENCE_VIOLATION",
            Self::MissingField(_) => "MISSING_FIELD",

            // Data
            Self::UnknownImageType(_) => "UNKNOWN_IMAGE_TYPE",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ImageNotFound(_)
                | Self::UserNotFound(_)
                | Self::ServerNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::MessageNotFound(_)
                | Self::ReactionNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::MissingField(_) | Self::ReferenceViolation(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}
