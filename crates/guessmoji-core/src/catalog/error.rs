//! Catalog error types

use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Malformed catalog JSON
    #[error("catalog parse error: {0}")]
    Parse(String),

    /// Two rows share an id
    #[error("duplicate movie id: {0}")]
    DuplicateId(String),

    /// A row has a blank title
    #[error("movie '{0}' has an empty title")]
    EmptyTitle(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
