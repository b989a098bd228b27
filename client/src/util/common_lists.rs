//! Operator-saved reusable entries for the editor's list fields.
//!
//! Operators can keep frequently used welcome messages and suggested
//! questions and insert them into any assistant's draft. Entries are kept
//! verbatim; blank entries are rejected and duplicates are detected by exact
//! string match, so `"Hi"` and `"Hi "` are two entries.

use serde::{Deserialize, Serialize};

use crate::state::draft::DraftList;
use crate::util::storage;

#[cfg(test)]
#[path = "common_lists_test.rs"]
mod common_lists_test;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedList {
    entries: Vec<String>,
}

impl SavedList {
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Add an entry. Returns `false` for blank input or an exact duplicate.
    pub fn add(&mut self, entry: &str) -> bool {
        if entry.trim().is_empty() || self.entries.iter().any(|e| e == entry) {
            return false;
        }
        self.entries.push(entry.to_owned());
        true
    }

    /// Remove an entry by exact match. Returns whether anything was removed.
    pub fn remove(&mut self, entry: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != entry);
        self.entries.len() != before
    }
}

#[must_use]
pub fn storage_name(list: DraftList) -> &'static str {
    match list {
        DraftList::WelcomeMessages => "common.welcome_messages",
        DraftList::SuggestedQuestions => "common.suggested_questions",
    }
}

#[must_use]
pub fn load(list: DraftList) -> SavedList {
    storage::load(storage_name(list)).unwrap_or_default()
}

/// Save `entry` to the list for `list` and return the updated list.
pub fn remember(list: DraftList, entry: &str) -> SavedList {
    let mut saved = load(list);
    if saved.add(entry) {
        storage::save(storage_name(list), &saved);
    }
    saved
}

/// Drop `entry` from the list for `list` and return the updated list.
pub fn forget(list: DraftList, entry: &str) -> SavedList {
    let mut saved = load(list);
    if saved.remove(entry) {
        storage::save(storage_name(list), &saved);
    }
    saved
}
