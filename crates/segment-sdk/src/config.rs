//! Configuration types for SegmentEngine

use segment_core::{Product, ValidatorOptions};
use serde::{Deserialize, Serialize};

/// Main engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Validator options for the editor pre-flight
    #[serde(default)]
    pub validator: ValidatorOptions,

    /// Products supplied directly instead of from a repository
    #[serde(skip)]
    pub products: Vec<Product>,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set validator options
    pub fn with_validator(mut self, options: ValidatorOptions) -> Self {
        self.validator = options;
        self
    }

    /// Add inline products
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products.extend(products);
        self
    }
}
