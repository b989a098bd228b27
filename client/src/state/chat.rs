//! Conversation state for the chat surface.
//!
//! DESIGN
//! ======
//! The transport producing replies belongs to the conversation backend. This
//! state only records the message history and applies the backend's
//! streaming events, mapping the terminal `Done` signal to
//! `is_streaming = false` on the reply being streamed.

use careaid::message::StreamError;
use careaid::{DisplayMessage, PreviewModel, StreamEvent};

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<DisplayMessage>,
}

impl ChatState {
    /// Seed a conversation with the assistant's welcome messages.
    #[must_use]
    pub fn from_model(model: &PreviewModel) -> Self {
        Self { messages: model.welcome_messages.clone() }
    }

    /// Append the user's message. Blank input is ignored; returns whether a
    /// message was added.
    pub fn push_user(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(DisplayMessage::user(text));
        true
    }

    /// Open an empty, streaming assistant reply.
    pub fn begin_reply(&mut self) {
        self.messages.push(DisplayMessage::streaming_assistant());
    }

    /// Apply a backend streaming event to the reply in progress.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::NoStreamingMessage`] when no reply is streaming.
    pub fn apply(&mut self, event: &StreamEvent) -> Result<(), StreamError> {
        let reply = self
            .messages
            .last_mut()
            .filter(|m| m.is_streaming)
            .ok_or(StreamError::NoStreamingMessage)?;
        reply.apply(event)
    }

    /// Whether a reply is still arriving.
    #[must_use]
    pub fn is_streaming(&self) -> bool {
        self.messages.last().is_some_and(|m| m.is_streaming)
    }
}
