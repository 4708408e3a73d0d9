//! Server configuration

use segment_sdk::{CatalogFormat, RepositoryConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the server's product catalog comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CatalogSource {
    /// JSON catalog file
    FileSystem {
        /// Catalog path (default: "data/products.json")
        #[serde(default = "default_catalog_path")]
        path: PathBuf,
        /// Record shape of the file
        #[serde(default)]
        format: CatalogFormat,
    },
    /// Empty in-memory catalog, filled through the sync endpoint
    Memory,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/products.json")
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::FileSystem {
            path: default_catalog_path(),
            format: CatalogFormat::Native,
        }
    }
}

impl CatalogSource {
    /// Repository configuration for the SDK
    pub fn to_repository_config(&self) -> RepositoryConfig {
        match self {
            CatalogSource::FileSystem { path, format } => {
                RepositoryConfig::file_system(path.to_string_lossy().to_string())
                    .with_format(*format)
            }
            CatalogSource::Memory => RepositoryConfig::memory(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Product catalog source
    pub catalog: CatalogSource,

    /// Report unexpected `stock_status` values as validation errors
    pub strict_suggested_values: bool,

    /// Log level
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            catalog: CatalogSource::default(),
            strict_suggested_values: false,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and `config/server.*`
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from("config/server")
    }

    /// Load configuration from `base` (any extension the `config` crate knows)
    /// and `SEGMENT_*` environment variables.
    ///
    /// A missing file leaves every setting at its default; an unreadable or
    /// malformed one is an error.
    pub fn load_from(base: &str) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::Environment::with_prefix("SEGMENT").try_parsing(true))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", base, e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }
}
