//! Page-level lookups: origin and server-embedded data.
//!
//! The server hands initial state to the client as JSON inside a
//! `<script type="application/json">` element. [`embed_json`] produces text
//! that is safe to place there and [`read_embedded_json`] reads it back.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Origin (`scheme://host[:port]`) of the current page, when in a browser.
pub fn current_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Serialize `value` for a JSON script element. `<` is escaped so the
/// payload cannot close the element early.
///
/// # Errors
///
/// Propagates serialization failures.
pub fn embed_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

/// Decode the JSON script element with id `id`. Missing or malformed
/// payloads read as `None`.
pub fn read_embedded_json<T: DeserializeOwned>(id: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()?.document()?.get_element_by_id(id)?.text_content()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring embedded #{id}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}
