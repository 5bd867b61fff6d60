//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors the backend can answer with.
///
/// Only request body parsing can fail; both routes are infallible.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was declared JSON but did not parse.
    #[error("invalid JSON body: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The request body could not be read, e.g. the client aborted mid-body.
    #[error("failed to read request body")]
    BodyRead(#[source] axum::Error),

    /// The request body exceeded the configured limit.
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MalformedJson(_) | ApiError::BodyRead(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };
        let message = self.to_string();
        tracing::warn!(%status, error = %message, "rejected request body");

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
