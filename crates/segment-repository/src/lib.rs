//! Catalog storage for the product segment engine
//!
//! The engine evaluates segments against an in-memory snapshot of the catalog;
//! this crate is where that snapshot comes from.
//!
//! # Backends
//!
//! - **File system**: a JSON array of products, either in native shape or as a raw
//!   commerce API export that is normalized on load
//! - **Memory**: for tests and for callers that supply products directly
//!
//! # Quick Start
//!
//! ```no_run
//! use segment_repository::{FileSystemProductRepository, ProductRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = FileSystemProductRepository::new("data/products.json")?;
//!     let products = repo.load_products().await?;
//!     println!("Loaded {} products", products.len());
//!     Ok(())
//! }
//! ```

pub mod commerce;
pub mod config;
pub mod error;
pub mod file_system;
pub mod loader;
pub mod memory;
pub mod traits;

// Re-exports - Configuration
pub use config::{CatalogFormat, RepositoryConfig, RepositorySource};

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Repositories
pub use commerce::{CommerceProduct, NamedRef};
pub use file_system::FileSystemProductRepository;
pub use loader::RepositoryLoader;
pub use memory::MemoryProductRepository;
pub use traits::{ProductRepository, WritableProductRepository};
