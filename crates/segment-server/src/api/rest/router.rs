//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use segment_sdk::SegmentEngine;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(engine: SegmentEngine) -> Router {
    let state = AppState {
        engine: Arc::new(RwLock::new(engine)),
    };

    Router::new()
        .route("/health", get(health))
        .route("/v1/segments/validate", post(validate))
        .route("/v1/segments/evaluate", post(evaluate))
        .route("/v1/products", get(list_products))
        .route("/v1/products/reload", post(reload_products))
        .route("/v1/products/sync", post(sync_products))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
