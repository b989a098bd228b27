#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn initial_draft_without_embedded_profile_is_fresh() {
    assert_eq!(initial_draft(), AssistantDraft::default());
}
