//! Error types for the catalog crate.

use crate::types::InstrumentId;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur in catalog operations.
///
/// These are typed signals only; translating them into user-facing
/// responses is the route layer's job.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// No record matches the given identifier.
    #[error("instrument not found: {0}")]
    NotFound(InstrumentId),

    /// Path identifier is not a well-formed integer.
    #[error("invalid instrument id: {0}")]
    InvalidId(String),

    /// Underlying persistence operation failed.
    #[error("storage error: {0}")]
    Storage(String),
}
