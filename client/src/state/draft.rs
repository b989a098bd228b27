//! Authoring-form draft of an assistant configuration.
//!
//! DESIGN
//! ======
//! The draft lives only in the editing session's memory. It carries more than
//! the chat surface shows (the backend instructions); the preview
//! observes a narrow projection of it (see `state::preview`). Saving the draft
//! is the persistence layer's job, not this module's.

use careaid::{AssistantProfile, Slug};
use careaid::draft::DEFAULT_WELCOME_MESSAGE;

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

/// Which of the two editable lists an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftList {
    WelcomeMessages,
    SuggestedQuestions,
}

/// Unsaved assistant configuration held by the editor form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantDraft {
    /// Set once the assistant has been saved and assigned a slug.
    pub slug: Option<Slug>,
    pub name: String,
    pub description: String,
    pub welcome_messages: Vec<String>,
    pub suggested_questions: Vec<String>,
    /// System instructions for the completion backend. Not shown in the preview.
    pub instructions: String,
}

impl Default for AssistantDraft {
    fn default() -> Self {
        Self {
            slug: None,
            name: String::new(),
            description: String::new(),
            welcome_messages: vec![DEFAULT_WELCOME_MESSAGE.to_owned()],
            suggested_questions: Vec::new(),
            instructions: String::new(),
        }
    }
}

impl AssistantDraft {
    #[must_use]
    pub fn list(&self, list: DraftList) -> &[String] {
        match list {
            DraftList::WelcomeMessages => &self.welcome_messages,
            DraftList::SuggestedQuestions => &self.suggested_questions,
        }
    }

    fn list_mut(&mut self, list: DraftList) -> &mut Vec<String> {
        match list {
            DraftList::WelcomeMessages => &mut self.welcome_messages,
            DraftList::SuggestedQuestions => &mut self.suggested_questions,
        }
    }

    /// Append an entry (possibly blank, as a fresh form row).
    pub fn push_entry(&mut self, list: DraftList, text: impl Into<String>) {
        self.list_mut(list).push(text.into());
    }

    /// Replace the entry at `index`. Out-of-range indices are ignored.
    pub fn set_entry(&mut self, list: DraftList, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.list_mut(list).get_mut(index) {
            *entry = text.into();
        }
    }

    /// Remove the entry at `index`. Out-of-range indices are ignored.
    pub fn remove_entry(&mut self, list: DraftList, index: usize) {
        let entries = self.list_mut(list);
        if index < entries.len() {
            entries.remove(index);
        }
    }
}

impl From<&AssistantProfile> for AssistantDraft {
    fn from(profile: &AssistantProfile) -> Self {
        Self {
            slug: Some(profile.slug.clone()),
            name: profile.name.clone(),
            description: profile.description.clone(),
            welcome_messages: profile.welcome_messages.clone(),
            suggested_questions: profile.suggested_questions.clone(),
            ..Self::default()
        }
    }
}
