//! Application roots mounted in the browser.

use careaid::{AssistantProfile, PreviewModel};
use leptos::prelude::*;

use crate::pages::conversation::ConversationPage;
use crate::pages::editor::EditorPage;
use crate::state::chat::ChatState;
use crate::state::draft::AssistantDraft;
use crate::util::page::{current_origin, read_embedded_json};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Id of the JSON script element carrying the saved profile being edited.
pub const DRAFT_ELEMENT_ID: &str = "careaid-draft";

/// Id of the JSON script element carrying the profile of a conversation.
pub const PROFILE_ELEMENT_ID: &str = "careaid-profile";

/// Id of the element wrapping the server-rendered conversation, replaced
/// once the client mounts.
pub const SSR_ROOT_ID: &str = "careaid-ssr";

/// Draft to start editing: the embedded saved profile, or a fresh draft.
pub fn initial_draft() -> AssistantDraft {
    read_embedded_json::<AssistantProfile>(DRAFT_ELEMENT_ID).map_or_else(AssistantDraft::default, |p| AssistantDraft::from(&p))
}

#[component]
pub fn EditorApp() -> impl IntoView {
    let origin = current_origin().unwrap_or_default();
    view! { <EditorPage draft=initial_draft() origin=origin /> }
}

/// Live conversation surface. `on_send` is absent when no backend is
/// connected, leaving the surface read-only like its server rendering.
#[component]
pub fn ConversationApp(
    profile: AssistantProfile,
    chat: RwSignal<ChatState>,
    on_send: Option<Callback<String>>,
) -> impl IntoView {
    let model = PreviewModel::resolve(Some(&profile.preview_draft()));
    match on_send {
        Some(on_send) => view! { <ConversationPage model=model chat=chat on_send=on_send /> }.into_any(),
        None => view! { <ConversationPage model=model chat=chat /> }.into_any(),
    }
}
