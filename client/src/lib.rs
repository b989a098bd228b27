//! Care-aid operator and visitor chat surfaces.
//!
//! Built twice: with `ssr` the server renders the conversation surface, the
//! preview fragment and the editor shell; with `hydrate` the editor is
//! mounted in the browser and wired to clipboard and `localStorage`, and the
//! conversation surface is remounted live and wired to the conversation
//! backend.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Editor draft, live preview bridge, conversation state |
//! | [`components`] | Message list, chat preview, share panel |
//! | [`pages`] | Editor page and public conversation page |
//! | [`util`] | Clipboard, storage, common lists, page lookups, backend seam |
//! | `ssr` | HTML documents for the server (feature `ssr`) |

pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod ssr;
pub mod state;
pub mod util;

/// Stylesheet shared by every chat surface.
pub const CHAT_CSS: &str = include_str!("../style/chat.css");

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start_editor() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting assistant editor");
    leptos::mount::mount_to_body(app::EditorApp);
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start_conversation() {
    use careaid::AssistantProfile;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(profile) = util::page::read_embedded_json::<AssistantProfile>(app::PROFILE_ELEMENT_ID) else {
        log::warn!("conversation profile missing; keeping the static surface");
        return;
    };
    let model = careaid::PreviewModel::resolve(Some(&profile.preview_draft()));
    let chat = RwSignal::new(state::chat::ChatState::from_model(&model));

    let on_send = util::backend::discover().map(|send| {
        util::backend::connect(chat, send);
        Callback::new(util::backend::send)
    });
    if on_send.is_none() {
        log::info!("no conversation backend registered; surface is read-only");
    }

    if let Some(ssr_root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(app::SSR_ROOT_ID))
    {
        ssr_root.remove();
    }
    log::info!("mounting conversation for {}", profile.slug);
    leptos::mount::mount_to_body(move || view! { <app::ConversationApp profile=profile chat=chat on_send=on_send /> });
}
