//! Best-effort `localStorage` persistence of small JSON values.
//!
//! Keys are namespaced under [`KEY_PREFIX`]. Outside the browser every read
//! misses and every write is dropped, so server rendering never depends on
//! stored state.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const KEY_PREFIX: &str = "careaid.";

#[must_use]
pub fn storage_key(name: &str) -> String {
    format!("{KEY_PREFIX}{name}")
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read and decode the value stored under `name`. Missing or malformed
/// entries read as `None`.
pub fn load<T: DeserializeOwned>(name: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(&storage_key(name)).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding stored {name}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Encode and store `value` under `name`.
pub fn save<T: Serialize>(name: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(value) {
            Ok(raw) => {
                if storage.set_item(&storage_key(name), &raw).is_err() {
                    log::warn!("localStorage rejected write of {name}");
                }
            }
            Err(err) => log::warn!("failed to encode {name}: {err}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, value);
    }
}
