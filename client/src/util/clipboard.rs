//! Clipboard writes for the share panel.
//!
//! Writes go through the async Clipboard API. A denied or unsupported write
//! surfaces as a [`CopyStatus::Failed`] notice; the artifact text stays
//! visible for manual selection either way.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available in this context")]
    Unavailable,
    #[error("clipboard write denied: {0}")]
    Denied(String),
}

/// Outcome of the most recent copy action, shown as a transient notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    Failed(ClipboardError),
}

impl CopyStatus {
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Copied => "Copied to clipboard",
            Self::Failed(ClipboardError::Unavailable) => "Clipboard unavailable, select the text to copy it",
            Self::Failed(ClipboardError::Denied(_)) => "Copy failed, select the text to copy it",
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<Result<(), ClipboardError>> for CopyStatus {
    fn from(result: Result<(), ClipboardError>) -> Self {
        match result {
            Ok(()) => Self::Copied,
            Err(err) => Self::Failed(err),
        }
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// [`ClipboardError::Unavailable`] outside a browser (or without a window),
/// [`ClipboardError::Denied`] when the browser rejects the write.
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Denied(format!("{err:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}
