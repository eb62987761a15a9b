//! Error types for the catalog-seeker crate.
//!
//! A search that finds nothing is not an error; it returns `None`.

use thiserror::Error;

/// Errors that can occur when building a catalog or selecting a strategy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records in the same catalog share an id.
    #[error("duplicate record id {id}")]
    DuplicateId { id: u64 },

    /// Strategy name did not match any known search strategy.
    #[error("unknown search strategy '{0}' (expected 'linear' or 'binary')")]
    UnknownStrategy(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
