//! Error handling utilities for repositories

use chat_core::error::DomainError;
use chat_core::value_objects::Id;
use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;
use tracing::{error, warn};

/// Convert SQLx error to DomainError
///
/// Constraint violations reported by PostgreSQL keep their constraint name
/// (`users_email_key`, `messages_channel_id_fkey`, ...) so callers can tell
/// which rule a write broke.
pub(crate) fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        let constraint = db_err
            .constraint()
            .map_or_else(|| db_err.message().to_string(), str::to_string);

        let mapped = match db_err.kind() {
            ErrorKind::UniqueViolation => Some(DomainError::AlreadyExists(constraint)),
            ErrorKind::ForeignKeyViolation => Some(DomainError::ReferenceViolation(constraint)),
            ErrorKind::NotNullViolation => Some(DomainError::MissingField(constraint)),
            ErrorKind::CheckViolation => Some(DomainError::ValidationError(constraint)),
            _ => None,
        };

        if let Some(err) = mapped {
            warn!(error = %err, "Constraint violation");
            return err;
        }
    }

    error!(error = %e, "Database error");
    DomainError::DatabaseError(e.to_string())
}

/// Create an "image not found" error
pub(crate) fn image_not_found(id: Id) -> DomainError {
    DomainError::ImageNotFound(id)
}

/// Create a "user not found" error
pub(crate) fn user_not_found(id: Id) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "server not found" error
pub(crate) fn server_not_found(id: Id) -> DomainError {
    DomainError::ServerNotFound(id)
}

/// Create a "channel not found" error
pub(crate) fn channel_not_found(id: Id) -> DomainError {
    DomainError::ChannelNotFound(id)
}

/// Create a "message not found" error
pub(crate) fn message_not_found(id: Id) -> DomainError {
    DomainError::MessageNotFound(id)
}

/// Create a "reaction not found" error
pub(crate) fn reaction_not_found(id: Id) -> DomainError {
    DomainError::ReactionNotFound(id)
}

/// An image row whose subtype row is missing
pub(crate) fn broken_subtype(id: Id, kind: &str) -> DomainError {
    error!(%id, kind, "Image row has no matching subtype row");
    DomainError::InternalError(format!("image {id} has no {kind} row"))
}
