//! Frontend host configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8080`)
/// - `BACKEND_URL` — where `/api/*` is routed (default: `"http://127.0.0.1:3000"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `METRICS_PORT` — Prometheus scrape port (default: unset, no exporter)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub log_level: String,
    pub metrics_port: Option<u16>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            backend_url: lookup("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            metrics_port: lookup("METRICS_PORT").and_then(|p| p.parse().ok()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            backend_url: "http://127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
            metrics_port: None,
        }
    }
}
