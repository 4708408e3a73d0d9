//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use segment_sdk::{SegmentEngine, ValidationError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Message returned when a request carries no usable `conditions` text
pub const MISSING_CONDITIONS: &str =
    "Missing or invalid \"conditions\" field. Expected a string with one condition per line.";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<SegmentEngine>>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Body of the validate and evaluate endpoints
///
/// `conditions` is kept as raw JSON so a non-string value can be reported
/// with the same message as a missing one.
#[derive(Debug, Default, Deserialize)]
pub struct SegmentRequestPayload {
    #[serde(default)]
    pub conditions: Option<serde_json::Value>,
}

impl SegmentRequestPayload {
    /// The condition text, if present, a string, and non-empty
    pub fn conditions_text(&self) -> Option<&str> {
        match &self.conditions {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Validation result
#[derive(Debug, Serialize)]
pub struct ValidateResponsePayload {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

/// Catalog reload response
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub success: bool,
    pub message: String,
}
