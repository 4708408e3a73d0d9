//! Response envelopes

use segment_core::{Condition, Product};
use serde::{Deserialize, Serialize};

/// Result of evaluating a segment
///
/// On success carries the parsed conditions, the match count and the matched
/// products. On failure carries only the first error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl SegmentResponse {
    pub fn matched(conditions: Vec<Condition>, products: Vec<Product>) -> Self {
        Self {
            success: true,
            error: None,
            conditions: Some(conditions),
            matched: Some(products.len()),
            products: Some(products),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            conditions: None,
            matched: None,
            products: None,
        }
    }
}

/// Catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub count: usize,
    pub products: Vec<Product>,
}

/// Result of importing products into the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub success: bool,
    pub synced: usize,
    pub products: Vec<Product>,
}
