//! Catalog repository traits
//!
//! - [`ProductRepository`]: read the whole catalog
//! - [`WritableProductRepository`]: insert-or-replace products by id

use async_trait::async_trait;
use segment_core::Product;

use crate::RepositoryResult;

/// Read access to a product catalog
///
/// Implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Load every product, in storage order
    async fn load_products(&self) -> RepositoryResult<Vec<Product>>;

    /// Number of stored products
    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.load_products().await?.len())
    }
}

/// Write access to a product catalog
#[async_trait]
pub trait WritableProductRepository: ProductRepository {
    /// Insert products, replacing any stored product with the same id.
    ///
    /// Returns the number of products written.
    async fn upsert_products(&self, products: Vec<Product>) -> RepositoryResult<usize>;
}

/// Merge `incoming` into `stored` by id, keeping the position of replaced products
/// and appending new ones in input order
pub(crate) fn merge_by_id(stored: &mut Vec<Product>, incoming: Vec<Product>) {
    for product in incoming {
        match stored.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => stored.push(product),
        }
    }
}
