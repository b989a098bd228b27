//! Seam to the external conversation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The completion backend lives outside this crate. On the public surface it
//! registers itself as `window.careaidBackend` with a `send(text)` function
//! before the client package starts. Each user message is handed to `send`;
//! the backend streams the reply back through `careaidChat.pushStreamEvent`,
//! one JSON-encoded [`StreamEvent`] per call:
//!
//! ```text
//! {"type":"delta","text":"We open at "}
//! {"type":"delta","text":"**9am**."}
//! {"type":"done"}
//! ```
//!
//! Without a registered backend the surface stays read-only.

use careaid::StreamEvent;
use careaid::message::StreamError;

use crate::state::chat::ChatState;

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

/// Global the backend registers itself under.
pub const BACKEND_GLOBAL: &str = "careaidBackend";

/// Global the client exposes `pushStreamEvent` under.
pub const CHAT_GLOBAL: &str = "careaidChat";

/// Reply text used when the backend refuses a message before streaming.
pub const SEND_FAILED_REPLY: &str = "Sorry, your message could not be sent. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("malformed stream event: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Stream(#[from] StreamError),
}

/// Decode one wire event and apply it to the reply in progress.
///
/// # Errors
///
/// [`BackendError::Decode`] for malformed JSON, [`BackendError::Stream`] when
/// no reply is streaming.
pub fn apply_wire_event(chat: &mut ChatState, json: &str) -> Result<StreamEvent, BackendError> {
    let event: StreamEvent = serde_json::from_str(json)?;
    chat.apply(&event)?;
    Ok(event)
}

/// Close the reply in progress after the backend refused a message. An empty
/// reply gets [`SEND_FAILED_REPLY`] so the visitor is not left with a blank
/// bubble. Returns whether a reply was closed.
pub fn fail_reply(chat: &mut ChatState) -> bool {
    if !chat.is_streaming() {
        return false;
    }
    if chat.messages.last().is_some_and(|m| m.content.is_empty()) {
        let _ = chat.apply(&StreamEvent::Delta(SEND_FAILED_REPLY.to_owned()));
    }
    chat.apply(&StreamEvent::Done).is_ok()
}

#[cfg(feature = "hydrate")]
pub use browser::{connect, discover, push_stream_event, send};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::{BACKEND_GLOBAL, apply_wire_event, fail_reply};
    use crate::state::chat::ChatState;

    thread_local! {
        static CHAT: RefCell<Option<RwSignal<ChatState>>> = const { RefCell::new(None) };
        static SEND: RefCell<Option<js_sys::Function>> = const { RefCell::new(None) };
    }

    /// `window.careaidBackend.send`, bound to the backend object, if present.
    pub fn discover() -> Option<js_sys::Function> {
        let window = web_sys::window()?;
        let backend = js_sys::Reflect::get(&window, &JsValue::from_str(BACKEND_GLOBAL)).ok()?;
        if backend.is_undefined() || backend.is_null() {
            return None;
        }
        let send = js_sys::Reflect::get(&backend, &JsValue::from_str("send")).ok()?;
        match send.dyn_into::<js_sys::Function>() {
            Ok(send) => Some(send.bind(&backend)),
            Err(_) => {
                log::warn!("{BACKEND_GLOBAL}.send is not a function");
                None
            }
        }
    }

    /// Attach the mounted conversation to the backend's `send` function.
    pub fn connect(chat: RwSignal<ChatState>, send: js_sys::Function) {
        CHAT.with_borrow_mut(|c| *c = Some(chat));
        SEND.with_borrow_mut(|s| *s = Some(send));
    }

    fn chat() -> Option<RwSignal<ChatState>> {
        CHAT.with_borrow(|c| *c)
    }

    /// Hand a user message to the backend. A throwing or missing backend
    /// closes the pending reply instead of leaving it streaming.
    pub fn send(text: String) {
        let outcome = SEND.with_borrow(|send| send.as_ref().map(|f| f.call1(&JsValue::NULL, &JsValue::from_str(&text))));
        let failed = match outcome {
            Some(Ok(_)) => false,
            Some(Err(err)) => {
                log::warn!("conversation backend rejected the message: {err:?}");
                true
            }
            None => {
                log::warn!("no conversation backend connected");
                true
            }
        };
        if failed {
            if let Some(chat) = chat() {
                chat.update(|c| {
                    fail_reply(c);
                });
            }
        }
    }

    /// Apply one JSON-encoded stream event from the backend.
    ///
    /// # Errors
    ///
    /// Throws back into the backend for malformed events, events with no reply
    /// in progress, or when no conversation is mounted.
    #[wasm_bindgen(js_name = pushStreamEvent)]
    pub fn push_stream_event(json: &str) -> Result<(), JsValue> {
        let chat = chat().ok_or_else(|| JsValue::from_str("conversation is not mounted"))?;
        let applied = chat
            .try_update(|c| apply_wire_event(c, json))
            .ok_or_else(|| JsValue::from_str("conversation is gone"))?;
        applied.map(|_| ()).map_err(|err| {
            log::warn!("stream event rejected: {err}");
            JsValue::from_str(&err.to_string())
        })
    }
}
