//! Canonical delivery paths.
//!
//! The share generator and the widget bootstrap both build the public
//! conversation surface URL through [`conversation_url`]; there is no other
//! place that knows the path layout.

use url::Url;

use crate::slug::Slug;

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

/// Prefix under which every assistant's public conversation surface lives.
pub const CONVERSATION_PATH_PREFIX: &str = "/public/care-aid";

/// Fixed path of the widget loader script on the delivery origin.
pub const WIDGET_SCRIPT_PATH: &str = "/widget.js";

/// Attribute on the widget `<script>` tag that carries the assistant slug.
pub const CHATBOT_ID_ATTRIBUTE: &str = "data-chatbot-id";

/// Attribute the `/widget.js` loader sets on the tag that invoked it. The
/// widget module selects on it, so other scripts whose `src` also ends in
/// `/widget.js` are never mistaken for its own tag.
pub const LOADER_MARKER_ATTRIBUTE: &str = "data-careaid-loader";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OriginError {
    #[error("invalid script URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("script URL {0:?} is not served over http(s)")]
    UnsupportedScheme(String),
}

/// Strip trailing slashes so `origin + path` never doubles a separator.
#[must_use]
pub fn normalize_origin(origin: &str) -> &str {
    origin.trim().trim_end_matches('/')
}

/// Path of the public conversation surface for `slug`.
#[must_use]
pub fn conversation_path(slug: &Slug) -> String {
    format!("{CONVERSATION_PATH_PREFIX}/{slug}")
}

/// Fully qualified public conversation surface URL.
#[must_use]
pub fn conversation_url(origin: &str, slug: &Slug) -> String {
    format!("{}{}", normalize_origin(origin), conversation_path(slug))
}

/// Fully qualified widget loader URL.
#[must_use]
pub fn widget_script_url(origin: &str) -> String {
    format!("{}{WIDGET_SCRIPT_PATH}", normalize_origin(origin))
}

/// CSS selector matching the widget's own invoking tag once the loader has
/// marked it.
#[must_use]
pub fn invoking_script_selector() -> String {
    format!("script[{LOADER_MARKER_ATTRIBUTE}][{CHATBOT_ID_ATTRIBUTE}]")
}

/// Origin (`scheme://host[:port]`) of an absolute script URL.
///
/// The widget always runs cross-origin, so it derives the delivery origin
/// from its own `src` rather than from the hosting page.
///
/// # Errors
///
/// Returns [`OriginError`] for unparsable URLs and non-http(s) schemes.
pub fn origin_of(script_src: &str) -> Result<String, OriginError> {
    let url = Url::parse(script_src.trim())
        .map_err(|e| OriginError::InvalidUrl { url: script_src.to_owned(), reason: e.to_string() })?;
    match url.scheme() {
        "http" | "https" => Ok(url.origin().ascii_serialization()),
        _ => Err(OriginError::UnsupportedScheme(script_src.to_owned())),
    }
}
