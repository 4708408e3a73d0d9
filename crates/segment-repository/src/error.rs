//! Error types for the catalog layer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur while loading or storing products
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Catalog file not found
    #[error("Catalog not found: {path}")]
    NotFound { path: String },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid path provided
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration is missing a field required by its source
    #[error("Missing field '{field}' for {catalog} catalog source")]
    MissingField { catalog: String, field: String },

    /// Catalog cannot be written in its current format
    #[error("Catalog is read-only: {0}")]
    ReadOnly(String),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}
