//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! is read-only after startup: the assistant directory, the configured
//! public origin and the conversation backend script.

use std::sync::Arc;

use crate::directory::AssistantDirectory;

/// Shared application state. Clone is required by Axum; the directory is
/// `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn AssistantDirectory>,
    /// Origin for share artifacts; when `None` it is derived per request.
    pub public_origin: Option<String>,
    /// Conversation backend script loaded by public surfaces.
    pub backend_script_url: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(directory: Arc<dyn AssistantDirectory>, public_origin: Option<String>) -> Self {
        Self { directory, public_origin, backend_script_url: None }
    }

    #[must_use]
    pub fn with_backend_script(mut self, url: Option<String>) -> Self {
        self.backend_script_url = url;
        self
    }
}
