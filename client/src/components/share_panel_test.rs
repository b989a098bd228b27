use super::*;

#[test]
fn unsaved_assistant_has_no_artifacts() {
    assert!(artifacts_for("https://care.example", None).is_empty());
}

#[test]
fn saved_assistant_lists_all_three_in_order() {
    let slug = Slug::parse("front-desk").unwrap();
    let artifacts = artifacts_for("https://care.example/", Some(&slug));
    let kinds: Vec<_> = artifacts.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, ArtifactKind::ALL);
    assert_eq!(artifacts[0].text, "https://care.example/public/care-aid/front-desk");
}

#[test]
fn artifacts_follow_slug_changes() {
    let a = artifacts_for("https://care.example", Some(&Slug::parse("a").unwrap()));
    let b = artifacts_for("https://care.example", Some(&Slug::parse("b").unwrap()));
    assert_ne!(a, b);
    assert!(b.iter().all(|artifact| artifact.text.contains("/b") || artifact.text.contains("\"b\"")));
}
