//! Assistant slugs.
//!
//! A slug is the stable, URL-safe identifier of an assistant. It is embedded
//! verbatim in URLs and HTML attributes, so only ASCII alphanumerics, `-` and
//! `_` are accepted; nothing needs escaping downstream.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

pub const MAX_SLUG_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,
    #[error("slug is longer than {MAX_SLUG_LEN} characters")]
    TooLong,
    #[error("slug contains invalid character {0:?}")]
    InvalidChar(char),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate a raw slug. Surrounding whitespace is trimmed first.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError`] when the trimmed value is empty, too long, or
    /// contains anything other than ASCII alphanumerics, `-` or `_`.
    pub fn parse(raw: &str) -> Result<Self, SlugError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SlugError::Empty);
        }
        if trimmed.len() > MAX_SLUG_LEN {
            return Err(SlugError::TooLong);
        }
        if let Some(bad) = trimmed.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_')) {
            return Err(SlugError::InvalidChar(bad));
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
