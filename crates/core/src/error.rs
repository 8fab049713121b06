//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable failures the caller can
/// surface to the user and retry (validation, missing items, malformed
/// payloads). None of these variants leave a partially mutated store behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation (empty, non-numeric, negative).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No live item carries the requested id.
    #[error("not found")]
    NotFound,

    /// An import payload was not a well-formed sequence of item records.
    #[error("import failed: {0}")]
    ImportFormat(String),

    /// Export was requested on an empty store.
    #[error("no inventory data to export")]
    EmptyExport,

    /// A snapshot could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn import_format(msg: impl Into<String>) -> Self {
        Self::ImportFormat(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
