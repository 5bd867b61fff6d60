//! Errors raised while forwarding `/api/*` to the backend.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// The backend could not be reached or the exchange broke off.
    #[error("upstream unavailable")]
    Upstream(#[source] reqwest::Error),

    /// The upstream response could not be turned into ours.
    #[error("internal error")]
    Response(#[source] axum::http::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::Upstream(err) => {
                tracing::error!(error = %err, "upstream request failed");
                StatusCode::BAD_GATEWAY
            }
            ProxyError::Response(err) => {
                tracing::error!(error = %err, "failed to build proxied response");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
