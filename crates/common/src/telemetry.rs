//! Logging, metrics and signal handling for the demo binaries.

use std::net::{Ipv4Addr, SocketAddr};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` is used.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Installs the Prometheus recorder with its own scrape listener.
///
/// Without a port no recorder is installed and `metrics` macros are no-ops.
/// Must be called from inside a tokio runtime.
pub fn install_metrics(port: Option<u16>) -> Result<(), BuildError> {
    let Some(port) = port else {
        return Ok(());
    };

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(%addr, "prometheus exporter listening");
    Ok(())
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}
