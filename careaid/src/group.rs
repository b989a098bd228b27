//! Visual grouping of consecutive same-role messages.
//!
//! A run of messages from the same role renders as one seamless bubble stack:
//! only the outer corners of the stack are fully rounded and the avatar is
//! shown once, next to the run's final bubble.

use serde::{Deserialize, Serialize};

use crate::message::{DisplayMessage, Role};

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

/// Position of a message inside its same-role run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPosition {
    pub is_first_in_group: bool,
    pub is_last_in_group: bool,
    pub show_avatar: bool,
}

/// Corner policy for a bubble, derived from its group position.
///
/// "Seam side" is the side the role's bubbles are aligned to; the squared
/// corners are where a bubble touches its neighbours in the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleShape {
    /// Single-bubble group: all four corners rounded.
    Rounded,
    /// Top of a stack: the bottom corner on the seam side is squared.
    SquareTrailing,
    /// Bottom of a stack: the top corner on the seam side is squared.
    SquareLeading,
    /// Middle of a stack: both seam-side corners are squared.
    SquareBoth,
}

impl GroupPosition {
    #[must_use]
    pub fn bubble_shape(self) -> BubbleShape {
        match (self.is_first_in_group, self.is_last_in_group) {
            (true, true) => BubbleShape::Rounded,
            (true, false) => BubbleShape::SquareTrailing,
            (false, true) => BubbleShape::SquareLeading,
            (false, false) => BubbleShape::SquareBoth,
        }
    }
}

impl BubbleShape {
    /// BEM modifier suffix used by the chat surface stylesheet.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::SquareTrailing => "square-trailing",
            Self::SquareLeading => "square-leading",
            Self::SquareBoth => "square-both",
        }
    }
}

/// Compute one [`GroupPosition`] per message, in input order.
#[must_use]
pub fn group(messages: &[DisplayMessage]) -> Vec<GroupPosition> {
    let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
    group_roles(&roles)
}

/// Grouping over bare roles; the content of a message never affects it.
#[must_use]
pub fn group_roles(roles: &[Role]) -> Vec<GroupPosition> {
    roles
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let is_first_in_group = i == 0 || roles[i - 1] != *role;
            let is_last_in_group = roles.get(i + 1).map_or(true, |next| next != role);
            GroupPosition { is_first_in_group, is_last_in_group, show_avatar: is_last_in_group }
        })
        .collect()
}
