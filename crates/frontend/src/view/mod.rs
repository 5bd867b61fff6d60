//! The display view: one greeting request per mount, rendered as HTML.

pub mod render;
pub mod state;

use std::sync::Arc;

use tokio::sync::watch;

use crate::source::HelloSource;

pub use render::render;
pub use state::DisplayState;

/// A mounted view.
///
/// Mounting issues exactly one request on a background task and returns
/// immediately with the loading state. The task writes the display state
/// once when the request completes. Dropping the view does not cancel the
/// request; its result is then discarded.
#[derive(Debug)]
pub struct App {
    state: watch::Receiver<DisplayState>,
}

impl App {
    /// Mounts the view and starts its single request.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn mount(source: Arc<dyn HelloSource>) -> Self {
        let (tx, rx) = watch::channel(DisplayState::loading());

        tokio::spawn(async move {
            let next = match source.fetch_hello().await {
                Ok(hello) => {
                    metrics::counter!("frontend_fetch_total", "outcome" => "success").increment(1);
                    DisplayState::connected(hello.message)
                }
                Err(err) => {
                    tracing::error!(error = %err, "error fetching from backend");
                    metrics::counter!("frontend_fetch_total", "outcome" => "failure").increment(1);
                    DisplayState::unreachable()
                }
            };
            // Fails only when the view is already gone.
            let _ = tx.send(next);
        });

        Self { state: rx }
    }

    /// Current display state.
    pub fn state(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    /// Waits for the request to complete and returns the resulting state.
    ///
    /// Returns at once if it already has. Never returns while the request
    /// is still pending.
    pub async fn settled(&mut self) -> DisplayState {
        // An error means the task is finished, so the stored value is final.
        let _ = self.state.changed().await;
        self.state()
    }

    /// Renders the current state.
    pub fn render(&self) -> String {
        render(&self.state.borrow())
    }
}
