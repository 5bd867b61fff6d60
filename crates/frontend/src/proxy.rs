//! Reverse proxy routing `/api/*` to the backend.
//!
//! The view requests `/api/hello` relative to its own origin; this is what
//! makes that path reach the backend.

use std::sync::Arc;

use axum::body::{Body, HttpBody};
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, CONNECTION, CONTENT_TYPE, HeaderName, TRANSFER_ENCODING};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;

use crate::AppState;
use crate::error::ProxyError;

/// Joins the backend base URL with the request path and query.
pub fn upstream_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query {
        Some(q) if !q.is_empty() => format!("{base}/{path}?{q}"),
        _ => format!("{base}/{path}"),
    }
}

/// ANY /api/{*path} — forwards the request and streams the answer back.
pub async fn forward(
    State(state): State<Arc<AppState>>,
    req: Request,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, req.uri().path(), req.uri().query());
    let method = req.method().clone();
    let headers = req.headers().clone();
    // Any method may carry a body; only a known-empty one is left off.
    let has_body = req.body().size_hint().exact() != Some(0);
    tracing::debug!(%method, url, "proxying request");

    let mut upstream = state.http_client.request(method, &url);
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = headers.get(&name) {
            upstream = upstream.header(name, value);
        }
    }

    if has_body {
        let body = req.into_body().into_data_stream();
        upstream = upstream.body(reqwest::Body::wrap_stream(body));
    }

    let resp = upstream
        .send()
        .await
        .map_err(ProxyError::Upstream)?;

    let status = resp.status();
    let headers = end_to_end_headers(resp.headers());
    let mut response = Response::builder()
        .status(status)
        .body(Body::from_stream(resp.bytes_stream()))
        .map_err(ProxyError::Response)?;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Upstream response headers minus the hop-by-hop ones.
fn end_to_end_headers(upstream: &HeaderMap<HeaderValue>) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(upstream.len());
    for (name, value) in upstream {
        if !is_hop_by_hop(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    [CONNECTION, TRANSFER_ENCODING].contains(name)
}
