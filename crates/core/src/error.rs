//! Store error model.

use thiserror::Error;

/// Result type used across the store and API layers.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Keep this focused on deterministic domain failures (validation, missing
/// records) plus the one infrastructure fault callers must see (backend
/// unavailable). Reconnection and retry policy belong to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A quantity failed validation (must be strictly positive).
    #[error("quantity must be greater than zero (got {0})")]
    InvalidQuantity(i64),

    /// A document name failed validation (must be non-empty).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Applying a quantity would overflow the stored counter.
    #[error("quantity overflow: {0}")]
    Overflow(String),

    /// An identifier was invalid (e.g. parse failure at the HTTP boundary).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No live document with the requested id.
    #[error("document not found")]
    NotFound,

    /// The key-value backend could not be reached or answered with an error.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn invalid_quantity(got: i64) -> Self {
        Self::InvalidQuantity(got)
    }

    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
