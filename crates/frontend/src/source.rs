//! Where the view gets its greeting from.

use async_trait::async_trait;
use common::{HELLO_PATH, HelloResponse};
use reqwest::StatusCode;
use thiserror::Error;

/// Why a greeting request did not succeed.
///
/// The view collapses every variant into the same display state; the
/// distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never got a response (refused, DNS, reset).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered outside the 2xx range.
    #[error("backend responded with status {0}")]
    Status(StatusCode),

    /// The body was not a JSON object with a `message` string.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A one-shot provider of the backend greeting.
#[async_trait]
pub trait HelloSource: Send + Sync {
    /// Requests the greeting once. No retries.
    async fn fetch_hello(&self) -> Result<HelloResponse, FetchError>;
}

/// Fetches the greeting over HTTP.
///
/// The client is used as configured; no timeout is added, so a backend that
/// never answers leaves the request pending.
#[derive(Debug, Clone)]
pub struct HttpHelloSource {
    client: reqwest::Client,
    url: String,
}

impl HttpHelloSource {
    /// Targets `<origin>/api/hello`.
    pub fn new(client: reqwest::Client, origin: &str) -> Self {
        Self {
            client,
            url: format!("{}{HELLO_PATH}", origin.trim_end_matches('/')),
        }
    }

    /// The full URL requested.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl HelloSource for HttpHelloSource {
    async fn fetch_hello(&self) -> Result<HelloResponse, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response
            .json::<HelloResponse>()
            .await
            .map_err(FetchError::Decode)
    }
}
