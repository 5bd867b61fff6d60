//! Generic JSON request body parsing.
//!
//! Every request declaring a JSON content type has its body buffered and
//! parsed before routing continues. The parsed value is left in the request
//! extensions as [`JsonBody`]; the raw bytes are put back so extractors such
//! as `axum::Json` still work.

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::middleware::Next;
use axum::response::Response;
use http_body_util::LengthLimitError;
use serde_json::Value;

use crate::error::ApiError;

/// Default body limit, 100 KiB.
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

/// A parsed JSON request body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

/// Middleware parsing JSON bodies up to `limit` bytes.
pub async fn parse_json_body(
    State(limit): State<usize>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !is_json(req.headers()) {
        return Ok(next.run(req).await);
    }

    if declared_length(req.headers()).is_some_and(|len| len > limit) {
        return Err(ApiError::PayloadTooLarge { limit });
    }

    let (mut parts, body) = req.into_parts();
    // Chunked bodies have no declared length; `to_bytes` enforces the limit.
    let bytes: Bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|err| {
            if exceeded_limit(&err) {
                ApiError::PayloadTooLarge { limit }
            } else {
                ApiError::BodyRead(err)
            }
        })?;

    if !bytes.is_empty() {
        let value: Value = serde_json::from_slice(&bytes)?;
        tracing::debug!(bytes = bytes.len(), "parsed JSON request body");
        parts.extensions.insert(JsonBody(value));
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}

/// Whether the content type is `application/json` or a `+json` suffix type.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Whether a body read failed because the limit was hit.
fn exceeded_limit(err: &axum::Error) -> bool {
    std::error::Error::source(err).is_some_and(|source| source.is::<LengthLimitError>())
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
