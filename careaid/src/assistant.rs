//! Saved assistant identity and chat-surface configuration.
//!
//! Profiles are owned by the persistence layer; this subsystem only reads
//! them to render the public conversation surface.

use serde::{Deserialize, Serialize};

use crate::draft::AssistantPreviewDraft;
use crate::slug::Slug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantProfile {
    pub slug: Slug,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub welcome_messages: Vec<String>,
    #[serde(default)]
    pub suggested_questions: Vec<String>,
}

impl AssistantProfile {
    /// The chat-surface fields of a saved profile, as a fully specified draft.
    #[must_use]
    pub fn preview_draft(&self) -> AssistantPreviewDraft {
        AssistantPreviewDraft {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            welcome_messages: Some(self.welcome_messages.clone()),
            suggested_questions: Some(self.suggested_questions.clone()),
        }
    }
}
