//! Widget startup.
//!
//! Validation runs to completion before the first DOM mutation, so a page
//! with a misconfigured tag ends up with one console diagnostic and nothing
//! else. Injection happens at most once per page load: a second evaluation of
//! the script finds the widget root and skips.

use careaid::Slug;
use careaid::paths::{OriginError, conversation_url, origin_of};
use careaid::slug::SlugError;

use crate::host::{Host, HostError};
use crate::styles::STYLESHEET;

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("could not locate the widget <script> tag")]
    MissingScriptTag,
    #[error("the widget <script> tag is missing the required data-chatbot-id attribute")]
    MissingChatbotId,
    #[error("invalid data-chatbot-id: {0}")]
    InvalidChatbotId(#[from] SlugError),
    #[error("cannot derive the widget origin: {0}")]
    InvalidScriptSource(#[from] OriginError),
    #[error("widget injection failed: {0}")]
    Host(#[from] HostError),
}

/// Successful startup outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Widget injected; the container loads `surface_url`.
    Mounted { slug: Slug, surface_url: String },
    /// The widget root was already present; nothing was injected.
    AlreadyMounted,
}

/// Validated invocation parameters read from the script tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub slug: Slug,
    pub origin: String,
}

impl Invocation {
    #[must_use]
    pub fn surface_url(&self) -> String {
        conversation_url(&self.origin, &self.slug)
    }
}

/// Read and validate the invoking tag without touching the DOM.
///
/// # Errors
///
/// Returns [`BootstrapError`] when the tag, its `data-chatbot-id`, or its
/// `src` is missing or invalid.
pub fn read_invocation<H: Host>(host: &H) -> Result<Invocation, BootstrapError> {
    let tag = host.invoking_script().ok_or(BootstrapError::MissingScriptTag)?;
    let raw_id = tag.chatbot_id.filter(|id| !id.trim().is_empty()).ok_or(BootstrapError::MissingChatbotId)?;
    let slug = Slug::parse(&raw_id)?;
    let origin = origin_of(&tag.src)?;
    Ok(Invocation { slug, origin })
}

/// Validate, then inject style, bubble and container exactly once.
///
/// On any error a single diagnostic is emitted through the host and no
/// injected node is left behind.
///
/// # Errors
///
/// Returns the [`BootstrapError`] that aborted startup.
pub fn bootstrap<H: Host>(host: &mut H) -> Result<Outcome, BootstrapError> {
    let result = run(host);
    if let Err(err) = &result {
        host.diagnostic(&err.to_string());
    }
    result
}

fn run<H: Host>(host: &mut H) -> Result<Outcome, BootstrapError> {
    let invocation = read_invocation(host)?;
    if host.widget_mounted() {
        return Ok(Outcome::AlreadyMounted);
    }

    let surface_url = invocation.surface_url();
    if let Err(err) = inject(host, &surface_url) {
        host.remove_injected();
        return Err(err.into());
    }

    Ok(Outcome::Mounted { slug: invocation.slug, surface_url })
}

fn inject<H: Host>(host: &mut H, surface_url: &str) -> Result<(), HostError> {
    host.inject_style(STYLESHEET)?;
    host.inject_bubble()?;
    host.inject_container(surface_url)?;
    host.set_container_open(false);
    Ok(())
}
