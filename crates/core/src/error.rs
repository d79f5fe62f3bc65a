//! Domain errors shared by the repository and HTTP layers.

use crate::types::DbId;

/// An error raised by CombatID domain rules.
///
/// Validators in this crate return `Result<(), String>`; callers wrap the
/// message in [`CoreError::Validation`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A fighter, document, ruleset or other record does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input broke a domain rule (unknown document type, blank reason, ...).
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The record changed underneath the request, e.g. a document reviewed
    /// by another official first.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller's role does not permit the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}
