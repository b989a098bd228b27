//! Pop-up chat widget for third-party pages.
//!
//! This crate is compiled to WebAssembly and loaded by the `/widget.js`
//! loader on any host page. On start it finds its own `<script>` tag, reads
//! the required `data-chatbot-id` attribute, and injects a floating bubble
//! plus a collapsible container holding the assistant's public conversation
//! surface in an `<iframe>`. Clicking the bubble toggles the container.
//!
//! All decisions live in host-agnostic code ([`bootstrap`], [`state`]) driven
//! through the [`host::Host`] trait, so they are tested natively against an
//! in-memory host. Only [`dom`] touches the real document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bootstrap`] | Startup validation, idempotency guard and one-time injection |
//! | [`state`] | [`state::WidgetState`] and the [`state::Widget`] toggle |
//! | [`host`] | DOM capabilities the bootstrap needs |
//! | [`styles`] | Scoped class names and the injected stylesheet |
//! | `dom` | `web-sys` host and click wiring (wasm32 only) |

pub mod bootstrap;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod host;
pub mod state;
pub mod styles;
#[cfg(test)]
mod test_host;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Wasm entry point, run once when the loader instantiates the module.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    dom::mount();
}
