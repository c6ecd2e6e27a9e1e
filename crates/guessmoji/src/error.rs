//! Common error types for GuessMoji host components.

use guessmoji_core::{CatalogError, ClueError};
use thiserror::Error;

/// Common error type for GuessMoji operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Clue board rejected an edit
    #[error(transparent)]
    Clue(#[from] ClueError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using GuessMoji Error.
pub type Result<T> = std::result::Result<T, Error>;
