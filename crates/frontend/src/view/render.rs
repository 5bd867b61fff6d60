//! HTML rendering of a [`DisplayState`].

use super::DisplayState;

pub const HEADING: &str = "🚀 Coolify Hackathon Demo";
pub const CONNECTED_INFO: &str = "✅ Connected to backend";
pub const DISCONNECTED_INFO: &str = "❌ Unable to connect to backend";

/// Renders the view: heading, status box, connectivity line.
pub fn render(state: &DisplayState) -> String {
    let (class, info) = if state.error {
        ("error", DISCONNECTED_INFO)
    } else {
        ("success", CONNECTED_INFO)
    };

    format!(
        "<div class=\"App\">\n<header class=\"App-header\">\n<h1>{heading}</h1>\n\
         <div class=\"message-box {class}\">\n<p>{message}</p>\n</div>\n\
         <p class=\"info\">{info}</p>\n</header>\n</div>\n",
        heading = escape(HEADING),
        message = escape(&state.message),
        info = escape(info),
    )
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
