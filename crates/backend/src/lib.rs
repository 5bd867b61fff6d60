//! Backend HTTP service for the hello demo.
//!
//! Serves `GET /health` and `GET /api/hello` with static JSON, accepts
//! cross-origin requests from anywhere, and parses JSON request bodies
//! generically.

pub mod body;
pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use common::{HEALTH_PATH, HELLO_PATH};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

/// Creates the Axum application router with all routes.
pub fn create_app(config: &Config) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(routes::health::check))
        .route(HELLO_PATH, get(routes::hello::get))
        .method_not_allowed_fallback(routes::not_found)
        .layer(middleware::from_fn_with_state(
            config.body_limit,
            body::parse_json_body,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address.
pub async fn bind(config: &Config) -> std::io::Result<TcpListener> {
    TcpListener::bind(config.addr()).await
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// Logs the listening port once before accepting connections.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr()?.port();
    tracing::info!(port, "backend server running on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
