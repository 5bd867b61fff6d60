//! Application configuration loaded from environment variables.

use crate::body::DEFAULT_BODY_LIMIT;

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `BODY_LIMIT` — maximum JSON request body in bytes (default: 100 KiB)
/// - `METRICS_PORT` — Prometheus scrape port (default: unset, no exporter)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub body_limit: usize,
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
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            body_limit: lookup("BODY_LIMIT")
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.body_limit),
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
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            body_limit: DEFAULT_BODY_LIMIT,
            metrics_port: None,
        }
    }
}
