//! Frontend server entry point.

use std::sync::Arc;

use common::telemetry;
use frontend::AppState;
use frontend::config::Config;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    telemetry::init_tracing(&config.log_level);

    // 2. Install Prometheus exporter when a scrape port is configured
    telemetry::install_metrics(config.metrics_port)
        .expect("failed to install Prometheus recorder");

    // 3. Build the application state. No request timeout: a hung backend keeps the view loading.
    let http_client = reqwest::Client::builder()
        .build()
        .expect("failed to build HTTP client");
    let state = Arc::new(AppState::from_config(&config, http_client));
    tracing::info!(backend_url = %config.backend_url, "routing /api to backend");

    // 4. Start server
    let app = frontend::create_app(state);
    let listener = frontend::bind(&config)
        .await
        .expect("failed to bind address");
    frontend::serve(listener, app, telemetry::shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
