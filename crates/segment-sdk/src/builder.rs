//! Builder pattern for SegmentEngine

use std::sync::Arc;

use segment_core::{FieldRegistry, Product, Validator, ValidatorOptions};
use segment_repository::{
    MemoryProductRepository, RepositoryConfig, RepositoryLoader, WritableProductRepository,
};
use segment_runtime::Evaluator;

use crate::config::EngineConfig;
use crate::engine::SegmentEngine;
use crate::error::{Result, SdkError};

/// Builder for SegmentEngine
///
/// # Example
///
/// ```rust,ignore
/// use segment_sdk::{RepositoryConfig, SegmentEngineBuilder};
///
/// // From a catalog file
/// let engine = SegmentEngineBuilder::new()
///     .with_repository(RepositoryConfig::file_system("data/products.json"))
///     .build()
///     .await?;
///
/// // Inline products (tests)
/// let engine = SegmentEngineBuilder::new()
///     .add_product(Product::new(1, "Parka", 129.0))
///     .build()
///     .await?;
/// ```
pub struct SegmentEngineBuilder {
    config: EngineConfig,
    repository_config: Option<RepositoryConfig>,
    repository: Option<Arc<dyn WritableProductRepository>>,
    registry: Option<FieldRegistry>,
}

impl SegmentEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            repository_config: None,
            repository: None,
            registry: None,
        }
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the catalog from the configured repository
    pub fn with_repository(mut self, config: RepositoryConfig) -> Self {
        self.repository_config = Some(config);
        self
    }

    /// Use an already opened repository
    pub fn with_repository_instance(mut self, repository: Arc<dyn WritableProductRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Add a product to an in-memory catalog
    pub fn add_product(mut self, product: Product) -> Self {
        self.config.products.push(product);
        self
    }

    /// Add products to an in-memory catalog
    pub fn add_products(mut self, products: Vec<Product>) -> Self {
        self.config.products.extend(products);
        self
    }

    /// Field registry used by the editor validator
    pub fn with_registry(mut self, registry: FieldRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set validator options
    pub fn with_validator_options(mut self, options: ValidatorOptions) -> Self {
        self.config.validator = options;
        self
    }

    /// Report unexpected `stock_status` values as errors instead of warnings
    pub fn strict_suggested_values(mut self, strict: bool) -> Self {
        self.config.validator.strict_suggested_values = strict;
        self
    }

    /// Build the engine and load the initial catalog snapshot
    pub async fn build(self) -> Result<SegmentEngine> {
        let has_inline = !self.config.products.is_empty();

        let repository: Arc<dyn WritableProductRepository> =
            match (self.repository, self.repository_config) {
                (Some(_), Some(_)) => {
                    return Err(SdkError::ConfigError(
                        "Set either a repository or a repository configuration, not both"
                            .to_string(),
                    ))
                }
                (Some(_), None) | (None, Some(_)) if has_inline => {
                    return Err(SdkError::ConfigError(
                        "Inline products cannot be combined with a repository".to_string(),
                    ))
                }
                (Some(repository), None) => repository,
                (None, Some(config)) => RepositoryLoader::new(config).open()?,
                (None, None) => Arc::new(MemoryProductRepository::with_products(
                    self.config.products.clone(),
                )),
            };

        let products = repository.load_products().await?;
        tracing::info!("Segment engine loaded {} products", products.len());

        let registry = self
            .registry
            .unwrap_or_else(|| FieldRegistry::standard().clone());
        let validator = Validator::with_registry(registry).with_options(self.config.validator);

        Ok(SegmentEngine::new(
            self.config,
            validator,
            Evaluator::new(),
            repository,
            products,
        ))
    }
}

impl Default for SegmentEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
