//! Backend server entry point.

use backend::config::Config;
use common::telemetry;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    telemetry::init_tracing(&config.log_level);

    // 2. Install Prometheus exporter when a scrape port is configured
    telemetry::install_metrics(config.metrics_port)
        .expect("failed to install Prometheus recorder");

    // 3. Build the application and start serving
    let app = backend::create_app(&config);
    let listener = backend::bind(&config)
        .await
        .expect("failed to bind address");
    backend::serve(listener, app, telemetry::shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
