//! Catalog configuration types
//!
//! Selects where the product catalog comes from and, for files, which JSON shape
//! the file holds.

use crate::error::{RepositoryError, RepositoryResult};
use serde::{Deserialize, Serialize};

/// Catalog source type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositorySource {
    /// JSON file on disk
    #[default]
    FileSystem,
    /// In-memory catalog (tests, or products supplied by the caller)
    Memory,
}

/// Shape of the records in a catalog file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// Records already in [`segment_core::Product`] shape
    #[default]
    Native,
    /// Raw commerce API export, normalized on load
    Commerce,
}

/// Catalog configuration
///
/// # Examples
///
/// ```rust
/// use segment_repository::{CatalogFormat, RepositoryConfig};
///
/// let config = RepositoryConfig::file_system("data/products.json");
/// let export = RepositoryConfig::file_system("data/export.json")
///     .with_format(CatalogFormat::Commerce);
/// let memory = RepositoryConfig::memory();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Source type
    #[serde(default)]
    pub source: RepositorySource,

    /// Catalog file path (required for FileSystem source)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Record shape of the catalog file
    #[serde(default)]
    pub format: CatalogFormat,
}

impl RepositoryConfig {
    /// File catalog at `path`, native format
    pub fn file_system(path: impl Into<String>) -> Self {
        Self {
            source: RepositorySource::FileSystem,
            path: Some(path.into()),
            format: CatalogFormat::Native,
        }
    }

    /// Empty in-memory catalog
    pub fn memory() -> Self {
        Self {
            source: RepositorySource::Memory,
            path: None,
            format: CatalogFormat::Native,
        }
    }

    /// Set the record format
    pub fn with_format(mut self, format: CatalogFormat) -> Self {
        self.format = format;
        self
    }

    /// Check that the fields required by the source are present
    pub fn validate(&self) -> RepositoryResult<()> {
        match self.source {
            RepositorySource::FileSystem if self.path.is_none() => {
                Err(RepositoryError::MissingField {
                    catalog: "filesystem".to_string(),
                    field: "path".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
