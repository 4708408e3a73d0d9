//! Request body extraction
//!
//! [`JsonBody`] rejects with a [`BodyRejection`] instead of axum's plain-text
//! rejection. Handlers that need their own failure shape take
//! `Result<JsonBody<T>, BodyRejection>` and render the message themselves.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// JSON request body
pub struct JsonBody<T>(pub T);

/// Why a request body could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRejection {
    message: String,
}

impl BodyRejection {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<JsonRejection> for BodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => format!("JSON syntax error: {}", err.body_text()),
            JsonRejection::MissingJsonContentType(_) => {
                "Missing 'Content-Type: application/json' header".to_string()
            }
            other => format!("Failed to read request body: {}", other.body_text()),
        };
        Self { message }
    }
}

/// Default rendering: `{error, status}` with 400, like [`crate::error::ServerError`]
impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": self.message,
                "status": StatusCode::BAD_REQUEST.as_u16(),
            })),
        )
            .into_response()
    }
}

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            let rejection = BodyRejection::from(rejection);
            tracing::debug!("Rejected request body: {}", rejection.message());
            rejection
        })?;
        Ok(Self(value))
    }
}
