//! Browser-facing helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper degrades to a no-op (or a `None`) outside the `hydrate`
//! build so server rendering and native tests never touch browser APIs.

pub mod backend;
pub mod clipboard;
pub mod common_lists;
pub mod page;
pub mod storage;
