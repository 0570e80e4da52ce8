//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, client-side failures (form validation,
/// invariants, duplicates). HTTP/transport concerns live in `ventaspro-client`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field or form failed validation (message is user-facing, Spanish).
    #[error("{0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("identificador inválido: {0}")]
    InvalidId(String),

    /// A requested record is not present in the local mirror.
    #[error("no encontrado")]
    NotFound,

    /// A duplicate record was detected before issuing a create call.
    #[error("{0}")]
    Duplicate(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }
}
