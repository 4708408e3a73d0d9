//! Integration tests for REST API endpoints
//!
//! These tests build a real SegmentEngine over a temporary catalog file and
//! drive the router end-to-end.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use segment_sdk::{RepositoryConfig, SegmentEngineBuilder};
use segment_server::api::create_router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

const CATALOG: &str = r#"[
  {"id": 1, "title": "Alpine Parka", "price": 249.0, "stock_status": "instock",
   "stock_quantity": 12, "category": "Jackets", "tags": ["Winter"], "on_sale": false},
  {"id": 2, "title": "Trail Cap", "price": "19.99", "stock_status": "outofstock",
   "stock_quantity": 0, "category": "Accessories", "tags": [], "on_sale": true},
  {"id": 3, "title": "Rain Shell", "price": 89.5, "stock_status": "instock",
   "stock_quantity": 4, "category": "Jackets", "tags": ["Rain"], "on_sale": true}
]"#;

/// Helper to create a router over a temporary file catalog
async fn create_test_app() -> (TempDir, Router) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("products.json");
    std::fs::write(&path, CATALOG).unwrap();

    let engine = SegmentEngineBuilder::new()
        .with_repository(RepositoryConfig::file_system(path.display().to_string()))
        .build()
        .await
        .unwrap();

    (temp_dir, create_router(engine))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, app) = create_test_app().await;
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_evaluate_matches_products() {
    let (_dir, app) = create_test_app().await;
    let request = post_json(
        "/v1/segments/evaluate",
        json!({"conditions": "category = jackets\non_sale = true"}),
    );

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["matched"], 1);
    assert_eq!(json["products"][0]["id"], 3);
    assert_eq!(
        json["conditions"][0],
        json!({"field": "category", "operator": "=", "value": "jackets"})
    );
}

#[tokio::test]
async fn test_evaluate_numeric_text_price() {
    let (_dir, app) = create_test_app().await;
    let request = post_json("/v1/segments/evaluate", json!({"conditions": "price < 20"}));

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched"], 1);
    assert_eq!(json["products"][0]["title"], "Trail Cap");
}

#[tokio::test]
async fn test_evaluate_missing_conditions() {
    let (_dir, app) = create_test_app().await;
    let expected = "Missing or invalid \"conditions\" field. Expected a string with one condition per line.";

    for body in [json!({}), json!({"conditions": ""}), json!({"conditions": 7})] {
        let (status, json) = send(app.clone(), post_json("/v1/segments/evaluate", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"success": false, "error": expected}));
    }
}

#[tokio::test]
async fn test_evaluate_malformed_line() {
    let (_dir, app) = create_test_app().await;
    let request = post_json("/v1/segments/evaluate", json!({"conditions": "price >"}));

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid condition format: \"price >\"");
}

#[tokio::test]
async fn test_evaluate_blank_lines_only() {
    let (_dir, app) = create_test_app().await;
    let request = post_json("/v1/segments/evaluate", json!({"conditions": "\n   \n"}));

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No valid conditions found");
}

#[tokio::test]
async fn test_validate_reports_errors_and_warnings() {
    let (_dir, app) = create_test_app().await;
    let request = post_json(
        "/v1/segments/validate",
        json!({"conditions": "colour = red\nstock_status = sold"}),
    );

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert_eq!(json["errors"][0]["line"], 1);
    assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
    assert_eq!(json["warnings"][0]["line"], 2);
}

#[tokio::test]
async fn test_validate_missing_conditions() {
    let (_dir, app) = create_test_app().await;
    let (status, json) = send(app, post_json("/v1/segments/validate", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("conditions"));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let (_dir, app) = create_test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/v1/segments/evaluate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(json.get("status").is_none());
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("JSON syntax error"));
}

#[tokio::test]
async fn test_validate_invalid_json_body() {
    let (_dir, app) = create_test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/v1/segments/validate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("JSON syntax error"));
}

#[tokio::test]
async fn test_missing_content_type() {
    let (_dir, app) = create_test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/v1/segments/evaluate")
        .body(Body::from(r#"{"conditions": "price > 1"}"#))
        .unwrap();

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(
        json["error"],
        "Missing 'Content-Type: application/json' header"
    );
}

#[tokio::test]
async fn test_list_products() {
    let (_dir, app) = create_test_app().await;
    let request = Request::builder()
        .uri("/v1/products")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 3);
}

#[tokio::test]
async fn test_reload_picks_up_file_changes() {
    let (dir, app) = create_test_app().await;
    std::fs::write(
        dir.path().join("products.json"),
        r#"[{"id": 9, "title": "Wool Socks", "price": 12, "stock_status": "instock"}]"#,
    )
    .unwrap();

    let (status, json) = send(app.clone(), post_json("/v1/products/reload", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let request = Request::builder()
        .uri("/v1/products")
        .body(Body::empty())
        .unwrap();
    let (_, json) = send(app, request).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["products"][0]["title"], "Wool Socks");
}

#[tokio::test]
async fn test_sync_upserts_commerce_records() {
    let (_dir, app) = create_test_app().await;
    let records = json!([
        {"id": 3, "name": "Rain Shell Pro", "price": "99.00", "stock_status": "instock",
         "stock_quantity": 2, "categories": [{"name": "Jackets"}], "tags": [], "on_sale": false},
        {"id": 10, "name": "Gaiters", "price": "", "stock_status": "onbackorder"}
    ]);

    let (status, json) = send(app.clone(), post_json("/v1/products/sync", records)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["synced"], 2);
    assert_eq!(json["products"][1]["price"], 0.0);

    let request = post_json(
        "/v1/segments/evaluate",
        json!({"conditions": "stock_status = onbackorder"}),
    );
    let (_, json) = send(app, request).await;
    assert_eq!(json["matched"], 1);
    assert_eq!(json["products"][0]["title"], "Gaiters");
}
