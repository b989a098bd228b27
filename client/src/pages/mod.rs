//! Page modules for the editor and the public conversation surface.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state providers and delegates rendering details to
//! `components`.

pub mod conversation;
pub mod editor;
