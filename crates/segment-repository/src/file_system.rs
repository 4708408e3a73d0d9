//! File system based catalog
//!
//! The catalog is a single JSON array. Native files hold [`Product`] records and
//! can be written back; commerce exports are normalized on load and are read-only.

use async_trait::async_trait;
use path_absolutize::Absolutize;
use segment_core::Product;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::commerce::{self, CommerceProduct};
use crate::config::CatalogFormat;
use crate::error::RepositoryError;
use crate::traits::{merge_by_id, ProductRepository, WritableProductRepository};
use crate::RepositoryResult;

/// Catalog stored in a JSON file
#[derive(Debug)]
pub struct FileSystemProductRepository {
    /// Absolute path of the catalog file
    path: PathBuf,
    /// Record shape of the file
    format: CatalogFormat,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl FileSystemProductRepository {
    /// Create a repository over a native catalog file.
    ///
    /// The file does not have to exist yet: loading a missing file is an error, but
    /// an upsert creates it. Its parent directory must exist.
    ///
    /// # Example
    /// ```no_run
    /// use segment_repository::FileSystemProductRepository;
    ///
    /// let repo = FileSystemProductRepository::new("data/products.json").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();

        let abs_path = path
            .absolutize()
            .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
            .to_path_buf();

        match abs_path.parent() {
            Some(parent) if parent.is_dir() => {}
            _ => {
                return Err(RepositoryError::InvalidPath {
                    path: path.to_path_buf(),
                })
            }
        }

        Ok(Self {
            path: abs_path,
            format: CatalogFormat::Native,
            write_lock: Mutex::new(()),
        })
    }

    /// Create a repository over a catalog file of the given format
    pub fn with_format<P: AsRef<Path>>(path: P, format: CatalogFormat) -> RepositoryResult<Self> {
        let mut repo = Self::new(path)?;
        repo.format = format;
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }

    /// Sibling file a new catalog is written to before it replaces the old one
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_native(&self) -> RepositoryResult<Vec<Product>> {
        let content = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl ProductRepository for FileSystemProductRepository {
    async fn load_products(&self) -> RepositoryResult<Vec<Product>> {
        if !self.path.exists() {
            return Err(RepositoryError::NotFound {
                path: self.path.display().to_string(),
            });
        }

        let products = match self.format {
            CatalogFormat::Native => self.read_native().await?,
            CatalogFormat::Commerce => {
                let content = fs::read_to_string(&self.path).await?;
                let records: Vec<CommerceProduct> = serde_json::from_str(&content)?;
                commerce::normalize(records)
            }
        };

        tracing::debug!(
            "Loaded {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }
}

#[async_trait]
impl WritableProductRepository for FileSystemProductRepository {
    async fn upsert_products(&self, products: Vec<Product>) -> RepositoryResult<usize> {
        if self.format != CatalogFormat::Native {
            return Err(RepositoryError::ReadOnly(format!(
                "{} is a commerce export",
                self.path.display()
            )));
        }

        let _guard = self.write_lock.lock().await;

        let mut stored = if self.path.exists() {
            self.read_native().await?
        } else {
            Vec::new()
        };

        let written = products.len();
        merge_by_id(&mut stored, products);
        let staging = self.staging_path();
        fs::write(&staging, serde_json::to_string_pretty(&stored)?).await?;
        fs::rename(&staging, &self.path).await?;

        tracing::info!(
            "Upserted {} products into {} ({} total)",
            written,
            self.path.display(),
            stored.len()
        );
        Ok(written)
    }
}
