//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surfaces and the share panel, reading shared
//! state from Leptos context or explicit props.

pub mod chat_preview;
pub mod message_list;
pub mod share_panel;
