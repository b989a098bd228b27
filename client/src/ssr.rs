//! Server-side rendering of the chat surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders complete HTML documents from these functions. Views
//! are rendered to strings inside a throwaway reactive [`Owner`]. The
//! conversation document is readable without JavaScript; the client package
//! then replaces it with a live surface built from the embedded profile. The
//! editor document is a shell the client mounts into, carrying the saved
//! profile (if any) as embedded JSON.

use careaid::{AssistantPreviewDraft, AssistantProfile, PreviewModel};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::CHAT_CSS;
use crate::app::{ConversationApp, DRAFT_ELEMENT_ID, PROFILE_ELEMENT_ID, SSR_ROOT_ID};
use crate::components::chat_preview::ChatPreview;
use crate::state::chat::ChatState;
use crate::util::backend::CHAT_GLOBAL;
use crate::util::page::embed_json;

#[cfg(test)]
#[path = "ssr_test.rs"]
mod ssr_test;

/// URL prefix the server mounts the client wasm package under.
pub const CLIENT_PKG_PATH: &str = "/app/pkg";

/// Render a view to HTML inside a fresh reactive owner.
pub fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    Owner::new().with(|| view().to_html())
}

fn document(title: &str, head: &str, body: &str) -> String {
    let title = title.to_owned();
    let title = render(move || view! { <title>{title}</title> });
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         {title}<style>{CHAT_CSS}</style>{head}</head><body>{body}</body></html>"
    )
}

fn embedded(id: &str, json: &str) -> String {
    format!("<script type=\"application/json\" id=\"{id}\">{json}</script>")
}

/// Public conversation surface for a saved assistant.
///
/// `backend_script` is the URL of the conversation backend's script; it is
/// loaded ahead of the client package so the backend can register itself
/// before the surface goes live.
///
/// # Errors
///
/// Fails only if the profile cannot be serialized.
pub fn conversation_document(profile: &AssistantProfile, backend_script: Option<&str>) -> Result<String, serde_json::Error> {
    let model = PreviewModel::resolve(Some(&profile.preview_draft()));
    let title = model.name.clone();
    let static_profile = profile.clone();
    let surface = render(move || {
        let chat = RwSignal::new(ChatState::from_model(&model));
        view! { <ConversationApp profile=static_profile chat=chat on_send=None /> }
    });
    let backend = backend_script
        .map(|src| {
            let src = src.to_owned();
            render(move || view! { <script src=src></script> })
        })
        .unwrap_or_default();
    let loader = format!(
        "<script type=\"module\">import init, {{ start_conversation, pushStreamEvent }} from '{CLIENT_PKG_PATH}/client.js';\
         init().then(() => {{ window.{CHAT_GLOBAL} = {{ pushStreamEvent }}; start_conversation(); }});</script>"
    );
    let body = format!(
        "<div id=\"{SSR_ROOT_ID}\">{surface}</div>{}{backend}{loader}",
        embedded(PROFILE_ELEMENT_ID, &embed_json(profile)?)
    );
    Ok(document(&title, "", &body))
}

/// Chat preview of a (partial) draft, as an HTML fragment.
pub fn preview_fragment(draft: Option<&AssistantPreviewDraft>) -> String {
    let model = PreviewModel::resolve(draft);
    render(move || view! { <ChatPreview model=Signal::derive(move || model.clone()) /> })
}

/// Editor shell that loads the client package and mounts the editor.
///
/// # Errors
///
/// Fails only if the profile cannot be serialized.
pub fn editor_document(profile: Option<&AssistantProfile>) -> Result<String, serde_json::Error> {
    let embedded = match profile {
        Some(profile) => embedded(DRAFT_ELEMENT_ID, &embed_json(profile)?),
        None => String::new(),
    };
    let loader = format!(
        "<script type=\"module\">import init, {{ start_editor }} from '{CLIENT_PKG_PATH}/client.js';\
         init().then(() => start_editor());</script>"
    );
    let body = format!("<noscript>The assistant editor needs JavaScript.</noscript>{embedded}{loader}");
    Ok(document("Assistant editor", "", &body))
}

/// Page shown for a conversation link whose assistant does not exist.
pub fn not_found_document() -> String {
    let body = render(|| {
        view! {
            <main class="not-found">
                <h1>"Assistant not found"</h1>
                <p>"This chat link is no longer available. Check the link or ask the site owner for a new one."</p>
            </main>
        }
    });
    document("Assistant not found", "", &body)
}
