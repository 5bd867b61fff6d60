//! Frontend for the hello demo.
//!
//! [`view`] holds the display view: it requests `/api/hello` once when
//! mounted and renders either the greeting or a fixed error. The rest of the
//! crate hosts that view over HTTP and routes `/api/*` to the backend.

pub mod config;
pub mod error;
pub mod page;
pub mod proxy;
pub mod source;
pub mod view;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::{any, get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;
use source::{HelloSource, HttpHelloSource};

/// Shared state for the frontend handlers.
pub struct AppState {
    /// Where mounted views get the greeting.
    pub source: Arc<dyn HelloSource>,
    /// Client used by the `/api/*` proxy.
    pub http_client: reqwest::Client,
    /// Backend origin, without trailing slash.
    pub backend_url: String,
}

impl AppState {
    /// State whose views and proxy both talk to `config.backend_url`.
    pub fn from_config(config: &Config, http_client: reqwest::Client) -> Self {
        let source = HttpHelloSource::new(http_client.clone(), &config.backend_url);
        Self {
            source: Arc::new(source),
            http_client,
            backend_url: config.backend_url.clone(),
        }
    }
}

/// Creates the Axum application router.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/{*path}", any(proxy::forward))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address.
pub async fn bind(config: &Config) -> std::io::Result<TcpListener> {
    TcpListener::bind(config.addr()).await
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr()?.port();
    tracing::info!(port, "frontend server running on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
