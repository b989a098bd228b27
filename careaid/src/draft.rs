//! Preview drafts and their resolution to a render model.
//!
//! A draft is the operator's unsaved configuration. Any field may be missing
//! while the form is half filled in, so resolution is total: missing or blank
//! values are replaced by fixed defaults and never produce an error.

use serde::{Deserialize, Serialize};

use crate::message::DisplayMessage;

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

pub const DEFAULT_NAME: &str = "My Chatbot";
pub const DEFAULT_DESCRIPTION: &str = "Your friendly assistant, ready to answer questions.";
pub const DEFAULT_WELCOME_MESSAGE: &str = "Hi there! How can I help you today?";

/// Suggested questions beyond this count are not displayed.
pub const MAX_SUGGESTED_QUESTIONS: usize = 3;

/// The four configuration fields the chat surface displays.
///
/// `None` means "not provided"; `Some(vec![])` means "explicitly empty".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantPreviewDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub welcome_messages: Option<Vec<String>>,
    pub suggested_questions: Option<Vec<String>>,
}

/// Fully resolved content of the preview surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewModel {
    pub name: String,
    pub description: String,
    /// Synthesized assistant messages, one per non-blank welcome message.
    pub welcome_messages: Vec<DisplayMessage>,
    /// At most [`MAX_SUGGESTED_QUESTIONS`] non-blank questions.
    pub suggested_questions: Vec<String>,
}

impl Default for PreviewModel {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl PreviewModel {
    /// Resolve a possibly missing or partial draft.
    ///
    /// - blank or missing name/description fall back to placeholders;
    /// - a missing welcome list yields one default welcome line, while a
    ///   present list keeps only its non-blank entries (possibly none);
    /// - suggested questions keep the first three non-blank entries.
    #[must_use]
    pub fn resolve(draft: Option<&AssistantPreviewDraft>) -> Self {
        let draft = draft.cloned().unwrap_or_default();

        let welcome_messages = match draft.welcome_messages {
            None => vec![DisplayMessage::assistant(DEFAULT_WELCOME_MESSAGE)],
            Some(lines) => non_blank(&lines).map(DisplayMessage::assistant).collect(),
        };

        let suggested_questions = draft
            .suggested_questions
            .as_deref()
            .map(|questions| non_blank(questions).take(MAX_SUGGESTED_QUESTIONS).map(str::to_owned).collect())
            .unwrap_or_default();

        Self {
            name: or_placeholder(draft.name.as_deref(), DEFAULT_NAME),
            description: or_placeholder(draft.description.as_deref(), DEFAULT_DESCRIPTION),
            welcome_messages,
            suggested_questions,
        }
    }

    #[must_use]
    pub fn has_suggestions(&self) -> bool {
        !self.suggested_questions.is_empty()
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => placeholder.to_owned(),
    }
}

fn non_blank(lines: &[String]) -> impl Iterator<Item = &str> {
    lines.iter().map(String::as_str).filter(|line| !line.trim().is_empty())
}
