use serde::{Deserialize, Serialize};

/// Path of the health route.
pub const HEALTH_PATH: &str = "/health";

/// Path of the greeting route.
pub const HELLO_PATH: &str = "/api/hello";

/// Status reported by `GET /health`.
pub const HEALTH_STATUS_OK: &str = "ok";

/// Greeting returned by `GET /api/hello`.
pub const HELLO_MESSAGE: &str = "Hello from backend!";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    /// The only health payload the backend ever sends.
    pub fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
        }
    }
}

/// Body of `GET /api/hello`.
///
/// The frontend deserializes the same type, so a payload missing `message`
/// fails to decode and is treated like any other failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

impl HelloResponse {
    /// The fixed greeting.
    pub fn greeting() -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
        }
    }
}
