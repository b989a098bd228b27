//! Display messages rendered by the chat surface and the preview.
//!
//! A message is immutable once rendered except for its streaming flag, which
//! goes from `true` to `false` exactly once when the backend signals that the
//! reply is complete.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

/// Error returned when a streaming transition is applied out of order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A delta or completion arrived for a message that is no longer streaming.
    #[error("message has already finished streaming")]
    AlreadyFinished,
    /// A streaming event arrived but there is no message to apply it to.
    #[error("no streaming message to apply the event to")]
    NoStreamingMessage,
}

/// Author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Lowercase label used in CSS modifiers and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single chat message as the surface renders it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMessage {
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub is_streaming: bool,
}

/// Incremental reply event from the conversation backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum StreamEvent {
    /// Another fragment of the reply text.
    Delta(String),
    /// Terminal "streaming complete" signal.
    Done,
}

impl DisplayMessage {
    /// A complete user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), is_streaming: false }
    }

    /// A complete assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into(), is_streaming: false }
    }

    /// An empty assistant message whose text is still arriving.
    #[must_use]
    pub fn streaming_assistant() -> Self {
        Self { role: Role::Assistant, content: String::new(), is_streaming: true }
    }

    /// Append a streamed fragment.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::AlreadyFinished`] once the message has completed.
    pub fn push_delta(&mut self, delta: &str) -> Result<(), StreamError> {
        if !self.is_streaming {
            return Err(StreamError::AlreadyFinished);
        }
        self.content.push_str(delta);
        Ok(())
    }

    /// Mark the message as complete.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::AlreadyFinished`] if the flag was already cleared;
    /// the flag never flips back.
    pub fn finish_streaming(&mut self) -> Result<(), StreamError> {
        if !self.is_streaming {
            return Err(StreamError::AlreadyFinished);
        }
        self.is_streaming = false;
        Ok(())
    }

    /// Apply one backend event to this message.
    ///
    /// # Errors
    ///
    /// Propagates [`StreamError::AlreadyFinished`] from the transition.
    pub fn apply(&mut self, event: &StreamEvent) -> Result<(), StreamError> {
        match event {
            StreamEvent::Delta(text) => self.push_delta(text),
            StreamEvent::Done => self.finish_streaming(),
        }
    }
}
