//! Inline message formatting.
//!
//! Only one style exists: a complete `**…**` pair becomes a bold segment with
//! the markers stripped. Everything else, including a lone unmatched marker,
//! is plain text. Bold spans do not nest; scanning resumes in plain mode after
//! each closing marker.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MARKER: &str = "**";

/// A styled run of message text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Bold(String),
}

impl Segment {
    /// Text of the segment without styling.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Bold(text) => text,
        }
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Bold(_))
    }
}

/// Split `content` into plain and bold segments, in source order.
///
/// Empty content yields no segments. Empty plain fragments (e.g. before a
/// leading bold span) are not emitted.
#[must_use]
pub fn format(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = content;

    while let Some(open) = rest.find(MARKER) {
        let after_open = &rest[open + MARKER.len()..];
        let Some(close) = after_open.find(MARKER) else {
            break;
        };
        push_plain(&mut segments, &rest[..open]);
        segments.push(Segment::Bold(after_open[..close].to_owned()));
        rest = &after_open[close + MARKER.len()..];
    }

    push_plain(&mut segments, rest);
    segments
}

/// Concatenate segment texts, dropping styling.
#[must_use]
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::Plain(text.to_owned()));
    }
}
