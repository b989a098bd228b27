//! Shared chat model and delivery conventions for the care-aid assistant.
//!
//! This crate owns everything the `server`, `client` and `careaid-widget`
//! crates must agree on: the display message model, the inline formatter, the
//! grouping engine, the preview draft resolution, assistant slugs, the public
//! surface path convention and the share-artifact generator. It has no browser
//! or server dependencies so every rule here is testable natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`assistant`] | Saved assistant profile read by the public surface |
//! | [`message`] | [`message::DisplayMessage`], roles and streaming transitions |
//! | [`format`] | `**bold**` inline formatter |
//! | [`group`] | Consecutive same-role grouping and bubble corner policy |
//! | [`draft`] | Preview draft and its never-failing resolution to a render model |
//! | [`slug`] | Validated, URL-safe assistant identifier |
//! | [`paths`] | Canonical public surface and widget script paths |
//! | [`share`] | Direct link, iframe and widget script artifacts |

pub mod assistant;
pub mod draft;
pub mod format;
pub mod group;
pub mod message;
pub mod paths;
pub mod share;
pub mod slug;

pub use assistant::AssistantProfile;
pub use draft::{AssistantPreviewDraft, PreviewModel};
pub use format::{Segment, format};
pub use group::{BubbleShape, GroupPosition, group};
pub use message::{DisplayMessage, Role, StreamEvent};
pub use share::{ArtifactKind, DistributionArtifact, generate};
pub use slug::Slug;
