//! Distribution artifacts: direct link, iframe embed and widget script.
//!
//! Artifacts are a pure function of `(origin, slug)` and are regenerated on
//! every request; identical inputs always produce byte-identical text so an
//! operator can re-copy a snippet without drift.

use serde::{Deserialize, Serialize};

use crate::paths::{CHATBOT_ID_ATTRIBUTE, conversation_url, widget_script_url};
use crate::slug::Slug;

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

pub const IFRAME_WIDTH: &str = "100%";
pub const IFRAME_HEIGHT: &str = "600px";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Direct,
    Iframe,
    WidgetScript,
}

impl ArtifactKind {
    pub const ALL: [Self; 3] = [Self::Direct, Self::Iframe, Self::WidgetScript];

    /// Human label shown next to the snippet.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Direct => "Direct link",
            Self::Iframe => "Embed (iframe)",
            Self::WidgetScript => "Chat widget",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionArtifact {
    pub kind: ArtifactKind,
    pub text: String,
}

/// Build the three artifacts, ordered as [`ArtifactKind::ALL`].
#[must_use]
pub fn generate(origin: &str, slug: &Slug) -> [DistributionArtifact; 3] {
    ArtifactKind::ALL.map(|kind| DistributionArtifact { kind, text: artifact_text(kind, origin, slug) })
}

/// Text of a single artifact.
#[must_use]
pub fn artifact_text(kind: ArtifactKind, origin: &str, slug: &Slug) -> String {
    match kind {
        ArtifactKind::Direct => conversation_url(origin, slug),
        ArtifactKind::Iframe => format!(
            r#"<iframe src="{}" width="{IFRAME_WIDTH}" height="{IFRAME_HEIGHT}" frameborder="0" style="border: none; border-radius: 12px;" allow="microphone"></iframe>"#,
            conversation_url(origin, slug)
        ),
        ArtifactKind::WidgetScript => {
            format!(r#"<script src="{}" {CHATBOT_ID_ATTRIBUTE}="{slug}"></script>"#, widget_script_url(origin))
        }
    }
}
