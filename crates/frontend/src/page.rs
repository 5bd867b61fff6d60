//! The HTML document wrapping the view.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::AppState;
use crate::view::App;

const STYLES: &str = r#"
.App { text-align: center; font-family: system-ui, sans-serif; }
.App-header { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; }
.message-box { padding: 1.5rem 2.5rem; border-radius: 8px; margin: 1.5rem 0; font-size: 1.25rem; }
.message-box.success { background: #e6f7ea; border: 2px solid #2e9e4f; color: #1d6b34; }
.message-box.error { background: #fdecea; border: 2px solid #d93025; color: #a12016; }
.info { color: #555; }
"#;

/// Wraps a rendered view in a complete HTML document.
pub fn document(view: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Coolify Hackathon Demo</title>\n<style>{STYLES}</style>\n</head>\n\
         <body>\n<div id=\"root\">\n{view}</div>\n</body>\n</html>\n"
    )
}

/// GET / — mounts a fresh view and responds once its request has completed.
///
/// Each call spawns one fetch task with no timeout. If the client disconnects
/// the handler is dropped but the task keeps running until the backend
/// answers, so against a hung backend these tasks accumulate without bound.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut app = App::mount(state.source.clone());
    app.settled().await;
    Html(document(&app.render()))
}
