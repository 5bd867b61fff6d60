//! Health check endpoint.

use axum::Json;
use common::HealthResponse;

/// GET /health — always reports `ok`.
pub async fn check() -> Json<HealthResponse> {
    metrics::counter!("health_requests_total").increment(1);
    Json(HealthResponse::ok())
}
