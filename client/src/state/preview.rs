//! Live configuration bridge: authoring draft -> chat preview.
//!
//! DESIGN
//! ======
//! The preview subscribes to an explicit list of observed fields rather than
//! the whole form. Every draft edit re-projects those four fields; the
//! preview model is rebuilt only when the projection differs by value from
//! the last one, so churn in unrelated fields such as the instructions never
//! re-renders the preview. Everything is local and synchronous: no network,
//! no debounce.
//!
//! Without an editing session (no draft in context) the bridge renders the
//! preview defaults.

use careaid::{AssistantPreviewDraft, PreviewModel};
use leptos::prelude::*;

use crate::state::draft::AssistantDraft;

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Draft fields the chat preview displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservedField {
    Name,
    Description,
    WelcomeMessages,
    SuggestedQuestions,
}

pub const OBSERVED_FIELDS: [ObservedField; 4] = [
    ObservedField::Name,
    ObservedField::Description,
    ObservedField::WelcomeMessages,
    ObservedField::SuggestedQuestions,
];

/// Narrow projection of the draft onto the observed fields.
#[must_use]
pub fn project(draft: &AssistantDraft) -> AssistantPreviewDraft {
    let mut projection = AssistantPreviewDraft::default();
    for field in OBSERVED_FIELDS {
        match field {
            ObservedField::Name => projection.name = Some(draft.name.clone()),
            ObservedField::Description => projection.description = Some(draft.description.clone()),
            ObservedField::WelcomeMessages => projection.welcome_messages = Some(draft.welcome_messages.clone()),
            ObservedField::SuggestedQuestions => {
                projection.suggested_questions = Some(draft.suggested_questions.clone());
            }
        }
    }
    projection
}

/// Observed fields whose values differ between two projections.
#[must_use]
pub fn changed_fields(prev: &AssistantPreviewDraft, next: &AssistantPreviewDraft) -> Vec<ObservedField> {
    OBSERVED_FIELDS
        .into_iter()
        .filter(|field| match field {
            ObservedField::Name => prev.name != next.name,
            ObservedField::Description => prev.description != next.description,
            ObservedField::WelcomeMessages => prev.welcome_messages != next.welcome_messages,
            ObservedField::SuggestedQuestions => prev.suggested_questions != next.suggested_questions,
        })
        .collect()
}

/// Equality-gated synchronizer between a draft and the preview model.
#[derive(Debug, Default)]
pub struct PreviewBridge {
    last: Option<AssistantPreviewDraft>,
    renders: u64,
}

impl PreviewBridge {
    /// Observe the current draft. Returns the new preview model when an
    /// observed field changed since the last call (or on the first call),
    /// and `None` when the preview is already up to date.
    pub fn sync(&mut self, draft: Option<&AssistantDraft>) -> Option<PreviewModel> {
        let next = draft.map(project).unwrap_or_default();
        let changed = match &self.last {
            Some(last) => changed_fields(last, &next),
            None => OBSERVED_FIELDS.to_vec(),
        };
        if changed.is_empty() {
            return None;
        }

        #[cfg(feature = "hydrate")]
        log::debug!("preview re-render: {changed:?}");

        let model = PreviewModel::resolve(Some(&next));
        self.last = Some(next);
        self.renders += 1;
        Some(model)
    }

    /// Number of times the preview model has been rebuilt.
    #[must_use]
    pub fn renders(&self) -> u64 {
        self.renders
    }
}

/// Reactive preview model fed from the `RwSignal<AssistantDraft>` context.
///
/// The memo only notifies subscribers when the bridge produced a new model.
pub fn use_preview_model() -> Memo<PreviewModel> {
    let draft = use_context::<RwSignal<AssistantDraft>>();
    let bridge = StoredValue::new(PreviewBridge::default());

    Memo::new(move |previous: Option<&PreviewModel>| {
        let current = draft.map(|d| d.get());
        bridge
            .try_update_value(|b| b.sync(current.as_ref()))
            .flatten()
            .or_else(|| previous.cloned())
            .unwrap_or_default()
    })
}
