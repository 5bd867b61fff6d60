//! The (message, error) pair driving the rendered view.

/// Placeholder shown until the request completes.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown for every kind of failed request.
pub const UNREACHABLE_MESSAGE: &str = "Backend not reachable";

/// What the view currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub message: String,
    pub error: bool,
}

impl DisplayState {
    /// Initial state on mount. Not an error.
    pub fn loading() -> Self {
        Self {
            message: LOADING_MESSAGE.to_string(),
            error: false,
        }
    }

    /// The backend answered with `message`.
    pub fn connected(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: false,
        }
    }

    /// The request failed, whatever the reason.
    pub fn unreachable() -> Self {
        Self {
            message: UNREACHABLE_MESSAGE.to_string(),
            error: true,
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::loading()
    }
}
