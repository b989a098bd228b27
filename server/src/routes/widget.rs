//! Widget loader script.
//!
//! SYSTEM CONTEXT
//! ==============
//! Third-party pages include `<script src="{origin}/widget.js"
//! data-chatbot-id="…">`. The loader is a classic script that derives the
//! delivery origin from its own `src` and imports the widget wasm package
//! from that origin. Before importing it marks its own tag with
//! `data-careaid-loader`; the package's start function locates the tag by
//! that marker, reads the chatbot id and mounts the bubble. Everything is served with
//! permissive CORS because it always runs on foreign origins.

use axum::http::header;
use axum::response::IntoResponse;
use careaid::paths::{CHATBOT_ID_ATTRIBUTE, LOADER_MARKER_ATTRIBUTE, WIDGET_SCRIPT_PATH};

/// URL prefix the widget wasm package is served under.
pub const WIDGET_PKG_PATH: &str = "/pkg";
pub const WIDGET_MODULE: &str = "careaid_widget.js";
pub const WIDGET_WASM: &str = "careaid_widget_bg.wasm";

#[must_use]
pub fn loader_script() -> String {
    format!(
        r#"(function () {{
  var script = document.currentScript || document.querySelector('script[src$="{WIDGET_SCRIPT_PATH}"][{CHATBOT_ID_ATTRIBUTE}]');
  if (!script || !script.src) {{
    console.warn("[careaid-widget] cannot locate the widget script tag");
    return;
  }}
  script.setAttribute("{LOADER_MARKER_ATTRIBUTE}", "");
  var origin = new URL(script.src).origin;
  import(origin + "{WIDGET_PKG_PATH}/{WIDGET_MODULE}")
    .then(function (pkg) {{
      return pkg.default({{ module_or_path: origin + "{WIDGET_PKG_PATH}/{WIDGET_WASM}" }});
    }})
    .catch(function (err) {{
      console.warn("[careaid-widget] failed to load", err);
    }});
}})();
"#
    )
}

/// `GET /widget.js`
pub async fn widget_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=300"),
        ],
        loader_script(),
    )
}

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;
