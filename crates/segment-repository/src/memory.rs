//! In-memory catalog

use async_trait::async_trait;
use segment_core::Product;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::traits::{merge_by_id, ProductRepository, WritableProductRepository};
use crate::RepositoryResult;

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl MemoryProductRepository {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `products`
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn load_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.products.read().await.len())
    }
}

#[async_trait]
impl WritableProductRepository for MemoryProductRepository {
    async fn upsert_products(&self, products: Vec<Product>) -> RepositoryResult<usize> {
        let written = products.len();
        merge_by_id(&mut *self.products.write().await, products);
        tracing::debug!("Upserted {} products into memory catalog", written);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_and_load() {
        let repo = MemoryProductRepository::with_products(vec![Product::new(1, "A", 1.0)]);
        let written = repo
            .upsert_products(vec![Product::new(1, "A2", 2.0), Product::new(2, "B", 3.0)])
            .await
            .unwrap();

        assert_eq!(written, 2);
        let products = repo.load_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "A2");
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = MemoryProductRepository::new();
        let handle = repo.clone();
        handle.upsert_products(vec![Product::new(5, "E", 5.0)]).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
