use thiserror::Error;

/// Categorized request failures surfaced by the domain layer.
///
/// The list-query functions themselves never fail for malformed input (bad
/// values degrade to defaults); these categories exist for the storage
/// collaborators and the validation paths that do reject.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),
}
