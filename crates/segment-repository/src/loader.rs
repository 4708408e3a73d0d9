//! Catalog loader
//!
//! Opens the repository described by a [`RepositoryConfig`].

use std::sync::Arc;

use crate::config::{RepositoryConfig, RepositorySource};
use crate::error::{RepositoryError, RepositoryResult};
use crate::{FileSystemProductRepository, MemoryProductRepository, WritableProductRepository};

/// Opens catalog repositories from configuration
///
/// # Example
///
/// ```rust,ignore
/// use segment_repository::{RepositoryConfig, RepositoryLoader};
///
/// let repo = RepositoryLoader::new(RepositoryConfig::file_system("data/products.json")).open()?;
/// let products = repo.load_products().await?;
/// ```
pub struct RepositoryLoader {
    config: RepositoryConfig,
}

impl RepositoryLoader {
    pub fn new(config: RepositoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Open the configured repository
    pub fn open(&self) -> RepositoryResult<Arc<dyn WritableProductRepository>> {
        self.config.validate()?;

        match self.config.source {
            RepositorySource::FileSystem => {
                let path = self.config.path.as_ref().ok_or_else(|| {
                    RepositoryError::Other("path required for FileSystem source".to_string())
                })?;
                tracing::debug!("Opening {:?} catalog at {}", self.config.format, path);
                Ok(Arc::new(FileSystemProductRepository::with_format(
                    path,
                    self.config.format,
                )?))
            }
            RepositorySource::Memory => Ok(Arc::new(MemoryProductRepository::new())),
        }
    }
}
