//! DOM capabilities required by the bootstrap.
//!
//! The embedded conversation surface is a capability boundary: a host only
//! ever hands the surface a URL (the iframe `src`). Implementations must not
//! read from or write into the surface's browsing context, and they give the
//! surface no handle back to the widget.

/// The widget's own invoking `<script>` tag, as found in the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptTag {
    /// Absolute, resolved `src` of the tag.
    pub src: String,
    /// Raw `data-chatbot-id` value, if the attribute is present.
    pub chatbot_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("document is not available")]
    NoDocument,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub trait Host {
    /// Locate the widget's invoking script tag.
    fn invoking_script(&self) -> Option<ScriptTag>;

    /// Whether the widget root is already present in the page.
    fn widget_mounted(&self) -> bool;

    /// Append the scoped stylesheet.
    fn inject_style(&mut self, css: &str) -> Result<(), HostError>;

    /// Append the widget root and the floating bubble.
    fn inject_bubble(&mut self) -> Result<(), HostError>;

    /// Append the hidden container and load the surface at `surface_url` in
    /// an isolated iframe. Called at most once per page load.
    fn inject_container(&mut self, surface_url: &str) -> Result<(), HostError>;

    /// Show or hide the container. Must not touch the iframe.
    fn set_container_open(&mut self, open: bool);

    /// Remove every node this host injected.
    fn remove_injected(&mut self);

    /// Emit a diagnostic to the developer console.
    fn diagnostic(&mut self, message: &str);
}
