//! Product Segment Engine SDK
//!
//! High-level API for validating segment text, evaluating it against the catalog
//! and keeping the catalog snapshot current.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod types;

// Re-export main types
pub use builder::SegmentEngineBuilder;
pub use config::EngineConfig;
pub use engine::SegmentEngine;
pub use error::{PreflightError, Result, SdkError};
pub use types::{ProductListResponse, SegmentResponse, SyncResponse};

// Re-export commonly used types from dependencies
pub use segment_core::{Condition, Product, ValidationError, ValidationReport, ValidatorOptions};
pub use segment_repository::{CatalogFormat, CommerceProduct, RepositoryConfig};
