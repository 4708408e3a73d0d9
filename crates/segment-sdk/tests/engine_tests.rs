//! End-to-end tests for SegmentEngine
//!
//! Builds engines over file and memory catalogs and runs the editor and server paths.

use std::sync::Arc;

use segment_repository::MemoryProductRepository;
use segment_sdk::{
    CommerceProduct, PreflightError, Product, RepositoryConfig, SdkError, SegmentEngineBuilder,
};
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {"id": 1, "title": "Alpine Parka", "price": 249.0, "stock_status": "instock",
   "stock_quantity": 12, "category": "Jackets", "tags": ["Winter"], "on_sale": false},
  {"id": 2, "title": "Trail Cap", "price": "19.99", "stock_status": "outofstock",
   "stock_quantity": 0, "category": "Accessories", "tags": [], "on_sale": true},
  {"id": 3, "title": "Rain Shell", "price": 89.5, "stock_status": "instock",
   "stock_quantity": 4, "category": "Jackets", "tags": ["Rain"], "on_sale": true}
]"#;

fn write_catalog(dir: &TempDir) -> String {
    let path = dir.path().join("products.json");
    std::fs::write(&path, CATALOG).unwrap();
    path.display().to_string()
}

fn commerce_record(id: i64, name: &str, price: &str) -> CommerceProduct {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "price": price,
        "stock_status": "instock",
        "stock_quantity": 3,
        "categories": [{"name": "Jackets"}],
        "tags": [],
        "on_sale": false
    }))
    .unwrap()
}

#[tokio::test]
async fn test_evaluate_file_catalog() {
    let dir = TempDir::new().unwrap();
    let engine = SegmentEngineBuilder::new()
        .with_repository(RepositoryConfig::file_system(write_catalog(&dir)))
        .build()
        .await
        .unwrap();

    let response = engine.evaluate("category = jackets\non_sale = true");
    assert!(response.success);
    assert_eq!(response.matched, Some(1));
    assert_eq!(response.products.as_ref().unwrap()[0].id, 3);
    assert_eq!(response.conditions.as_ref().unwrap().len(), 2);
}

#[tokio::test]
async fn test_strict_path_accepts_glued_operators() {
    let dir = TempDir::new().unwrap();
    let engine = SegmentEngineBuilder::new()
        .with_repository(RepositoryConfig::file_system(write_catalog(&dir)))
        .build()
        .await
        .unwrap();

    // The editor rejects this form; execution accepts it
    assert!(engine.preflight("price>=50").is_err());
    assert_eq!(engine.evaluate("price>=50").matched, Some(2));
}

#[tokio::test]
async fn test_products_listing() {
    let dir = TempDir::new().unwrap();
    let engine = SegmentEngineBuilder::new()
        .with_repository(RepositoryConfig::file_system(write_catalog(&dir)))
        .build()
        .await
        .unwrap();

    let listing = engine.products();
    assert!(listing.success);
    assert_eq!(listing.count, 3);
}

#[tokio::test]
async fn test_missing_catalog_fails_build() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json").display().to_string();
    let result = SegmentEngineBuilder::new()
        .with_repository(RepositoryConfig::file_system(path))
        .build()
        .await;
    assert!(matches!(result, Err(SdkError::RepositoryError(_))));
}

#[tokio::test]
async fn test_inline_products_conflict_with_repository() {
    let result = SegmentEngineBuilder::new()
        .with_repository(RepositoryConfig::memory())
        .add_product(Product::new(1, "A", 1.0))
        .build()
        .await;
    assert!(matches!(result, Err(SdkError::ConfigError(_))));
}

#[tokio::test]
async fn test_reload_picks_up_repository_changes() {
    let repository = Arc::new(MemoryProductRepository::new());
    let mut engine = SegmentEngineBuilder::new()
        .with_repository_instance(repository.clone())
        .build()
        .await
        .unwrap();
    assert_eq!(engine.products().count, 0);

    use segment_repository::WritableProductRepository;
    repository
        .upsert_products(vec![Product::new(9, "Boot", 80.0)])
        .await
        .unwrap();

    assert_eq!(engine.reload().await.unwrap(), 1);
    assert_eq!(engine.evaluate("price = 80").matched, Some(1));
}

#[tokio::test]
async fn test_sync_normalizes_and_upserts() {
    let dir = TempDir::new().unwrap();
    let mut engine = SegmentEngineBuilder::new()
        .with_repository(RepositoryConfig::file_system(write_catalog(&dir)))
        .build()
        .await
        .unwrap();

    let response = engine
        .sync(vec![
            commerce_record(1, "Alpine Parka v2", "199.00"),
            commerce_record(4, "Down Vest", "not a price"),
        ])
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.synced, 2);
    assert_eq!(engine.products().count, 4);
    assert_eq!(engine.evaluate("title = alpine parka v2").matched, Some(1));
    assert_eq!(engine.evaluate("price = 0").matched, Some(1));
}

#[tokio::test]
async fn test_strict_suggested_values_blocks_preflight() {
    let engine = SegmentEngineBuilder::new()
        .strict_suggested_values(true)
        .build()
        .await
        .unwrap();

    match engine.preflight("stock_status = available") {
        Err(PreflightError::Invalid(errors)) => {
            assert!(errors[0].message.starts_with("Consider using one of"))
        }
        other => panic!("unexpected {:?}", other),
    }
}
