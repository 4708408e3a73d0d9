//! REST API implementation
//!
//! - types: Request/response type definitions
//! - extractors: Custom request extractors
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::{BodyRejection, JsonBody};
pub use router::create_router;
pub use types::{
    AppState, HealthResponse, ReloadResponse, SegmentRequestPayload, ValidateResponsePayload,
    MISSING_CONDITIONS,
};
