//! Greeting endpoint consumed by the frontend view.

use axum::Json;
use common::HelloResponse;

/// GET /api/hello — returns the fixed greeting.
#[tracing::instrument]
pub async fn get() -> Json<HelloResponse> {
    metrics::counter!("hello_requests_total").increment(1);
    tracing::debug!("serving greeting");
    Json(HelloResponse::greeting())
}
