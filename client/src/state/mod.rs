//! Client state for the editor and chat surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages provide these as Leptos context (`RwSignal<AssistantDraft>`,
//! `RwSignal<ChatState>`); components read them with `use_context`.

pub mod chat;
pub mod draft;
pub mod preview;
