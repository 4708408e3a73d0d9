//! API endpoint handlers

use super::extractors::{BodyRejection, JsonBody};
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, http::StatusCode, Json};
use segment_sdk::{CommerceProduct, ProductListResponse, SegmentResponse, SyncResponse};
use tracing::{error, info};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Line-by-line validation of segment text
pub(super) async fn validate(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SegmentRequestPayload>,
) -> Result<Json<ValidateResponsePayload>, ServerError> {
    let text = payload
        .conditions_text()
        .ok_or_else(|| ServerError::InvalidRequest(MISSING_CONDITIONS.to_string()))?;

    let report = state.engine.read().await.validate(text);
    info!(
        "Validated segment: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );

    Ok(Json(ValidateResponsePayload {
        valid: report.is_valid(),
        errors: report.errors,
        warnings: report.warnings,
    }))
}

/// Evaluate segment text against the catalog
///
/// Failures use the same envelope as successes, with status 400, including an
/// unreadable body.
pub(super) async fn evaluate(
    State(state): State<AppState>,
    body: Result<JsonBody<SegmentRequestPayload>, BodyRejection>,
) -> (StatusCode, Json<SegmentResponse>) {
    let payload = match body {
        Ok(JsonBody(payload)) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(SegmentResponse::failure(rejection.into_message())),
            )
        }
    };

    let Some(text) = payload.conditions_text() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(SegmentResponse::failure(MISSING_CONDITIONS)),
        );
    };

    info!("Received evaluate request with {} lines", text.lines().count());
    let response = state.engine.read().await.evaluate(text);

    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(response))
}

/// Current catalog snapshot
pub(super) async fn list_products(State(state): State<AppState>) -> Json<ProductListResponse> {
    Json(state.engine.read().await.products())
}

/// Re-read the catalog from its source
pub(super) async fn reload_products(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ServerError> {
    info!("Received catalog reload request");

    let count = {
        let mut engine = state.engine.write().await;
        engine.reload().await.map_err(|e| {
            error!("Failed to reload catalog: {}", e);
            ServerError::InternalError(format!("Failed to reload catalog: {}", e))
        })?
    };

    Ok(Json(ReloadResponse {
        success: true,
        message: format!("Catalog reloaded: {} products", count),
    }))
}

/// Import commerce-platform records into the catalog
pub(super) async fn sync_products(
    State(state): State<AppState>,
    JsonBody(records): JsonBody<Vec<CommerceProduct>>,
) -> Result<Json<SyncResponse>, ServerError> {
    info!("Received sync request with {} records", records.len());

    let mut engine = state.engine.write().await;
    let response = engine.sync(records).await.map_err(|e| {
        error!("Failed to sync products: {}", e);
        ServerError::from(e)
    })?;

    Ok(Json(response))
}
