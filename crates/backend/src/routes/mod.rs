use axum::http::StatusCode;

pub mod health;
pub mod hello;

/// A known path hit with the wrong method is reported as not found, the same
/// as an unknown path.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
