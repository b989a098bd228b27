//! Scoped class names and the injected stylesheet.
//!
//! Every selector is prefixed `careaid-widget` so the host page's styles and
//! ours cannot collide.

// ── Element ids ─────────────────────────────────────────────────

/// Id of the root element; its presence is the idempotency guard.
pub const ROOT_ID: &str = "careaid-widget-root";

/// Id of the injected `<style>` element.
pub const STYLE_ID: &str = "careaid-widget-style";

// ── Classes ─────────────────────────────────────────────────────

pub const BUBBLE_CLASS: &str = "careaid-widget-bubble";
pub const CONTAINER_CLASS: &str = "careaid-widget-container";
pub const CONTAINER_OPEN_CLASS: &str = "careaid-widget-container--open";
pub const FRAME_CLASS: &str = "careaid-widget-frame";

// ── Labels ──────────────────────────────────────────────────────

pub const BUBBLE_LABEL: &str = "Open chat";
pub const FRAME_TITLE: &str = "Chat assistant";

/// Inline chat icon for the bubble.
pub const BUBBLE_ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/></svg>"#;

pub const STYLESHEET: &str = r"
#careaid-widget-root {
  position: fixed;
  right: 20px;
  bottom: 20px;
  z-index: 2147483000;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
}
.careaid-widget-bubble {
  width: 60px;
  height: 60px;
  border: none;
  border-radius: 50%;
  background: #2563eb;
  color: #ffffff;
  box-shadow: 0 4px 14px rgba(0, 0, 0, 0.2);
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: transform 0.15s ease;
}
.careaid-widget-bubble:hover {
  transform: scale(1.06);
}
.careaid-widget-container {
  display: none;
  position: absolute;
  right: 0;
  bottom: 76px;
  width: 380px;
  height: 600px;
  max-width: calc(100vw - 40px);
  max-height: calc(100vh - 120px);
  border-radius: 12px;
  overflow: hidden;
  background: #ffffff;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.25);
}
.careaid-widget-container--open {
  display: block;
}
.careaid-widget-frame {
  width: 100%;
  height: 100%;
  border: none;
}
";

/// Class attribute of the container for a visibility state.
#[must_use]
pub fn container_class(open: bool) -> String {
    if open { format!("{CONTAINER_CLASS} {CONTAINER_OPEN_CLASS}") } else { CONTAINER_CLASS.to_owned() }
}
