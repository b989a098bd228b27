use super::*;
use careaid::draft::{DEFAULT_DESCRIPTION, DEFAULT_NAME};

fn named(name: &str) -> AssistantDraft {
    AssistantDraft { name: name.to_owned(), ..AssistantDraft::default() }
}

// =============================================================
// Projection
// =============================================================

#[test]
fn projection_carries_only_observed_fields() {
    let mut draft = named("Front Desk");
    draft.instructions = "Be brief".into();

    let projection = project(&draft);
    assert_eq!(projection.name.as_deref(), Some("Front Desk"));
    assert_eq!(projection.description.as_deref(), Some(""));
    assert_eq!(projection.welcome_messages.as_deref(), Some(draft.welcome_messages.as_slice()));
    assert_eq!(projection.suggested_questions.as_deref(), Some(&[][..]));
}

#[test]
fn changed_fields_reports_each_difference() {
    let a = project(&named("A"));
    let mut edited = named("B");
    edited.suggested_questions.push("Hours?".into());
    let b = project(&edited);
    assert_eq!(changed_fields(&a, &b), vec![ObservedField::Name, ObservedField::SuggestedQuestions]);
    assert!(changed_fields(&a, &a).is_empty());
}

// =============================================================
// Bridge
// =============================================================

#[test]
fn first_sync_always_renders() {
    let mut bridge = PreviewBridge::default();
    let model = bridge.sync(Some(&named("Clinic"))).unwrap();
    assert_eq!(model.name, "Clinic");
    assert_eq!(bridge.renders(), 1);
}

#[test]
fn unchanged_observed_fields_skip_render() {
    let mut bridge = PreviewBridge::default();
    let mut draft = named("Clinic");
    bridge.sync(Some(&draft));

    draft.instructions = "Answer in French".into();
    assert!(bridge.sync(Some(&draft)).is_none());
    draft.instructions.push_str(" and keep it short");
    assert!(bridge.sync(Some(&draft)).is_none());
    assert_eq!(bridge.renders(), 1);
}

#[test]
fn equal_value_with_new_identity_skips_render() {
    let mut bridge = PreviewBridge::default();
    bridge.sync(Some(&named("Clinic")));
    let rebuilt = named(&String::from("Clinic"));
    assert!(bridge.sync(Some(&rebuilt)).is_none());
}

#[test]
fn each_observed_edit_renders() {
    let mut bridge = PreviewBridge::default();
    let mut draft = AssistantDraft::default();
    bridge.sync(Some(&draft));

    draft.name = "N".into();
    assert!(bridge.sync(Some(&draft)).is_some());
    draft.description = "D".into();
    assert!(bridge.sync(Some(&draft)).is_some());
    draft.welcome_messages = vec!["", "  ", "Hi!"].into_iter().map(String::from).collect();
    let model = bridge.sync(Some(&draft)).unwrap();
    assert_eq!(model.welcome_messages.len(), 1);
    assert_eq!(model.welcome_messages[0].content, "Hi!");
    draft.suggested_questions = vec!["Q1".into()];
    assert!(bridge.sync(Some(&draft)).is_some());

    assert_eq!(bridge.renders(), 5);
}

#[test]
fn missing_draft_renders_defaults() {
    let mut bridge = PreviewBridge::default();
    let model = bridge.sync(None).unwrap();
    assert_eq!(model, PreviewModel::default());
    assert_eq!(model.name, DEFAULT_NAME);
    assert_eq!(model.description, DEFAULT_DESCRIPTION);
    assert!(bridge.sync(None).is_none());
}

#[test]
fn blank_identity_renders_placeholders() {
    let mut bridge = PreviewBridge::default();
    let model = bridge.sync(Some(&named("   "))).unwrap();
    assert_eq!(model.name, DEFAULT_NAME);
}

// =============================================================
// Reactive binding
// =============================================================

#[test]
fn preview_hook_without_editing_session_uses_defaults() {
    let owner = Owner::new();
    let model = owner.with(|| use_preview_model().get_untracked());
    assert_eq!(model, PreviewModel::default());
}

#[test]
fn preview_hook_follows_draft_context() {
    let owner = Owner::new();
    owner.with(|| {
        let draft = RwSignal::new(named("Nurse Line"));
        provide_context(draft);
        let model = use_preview_model();
        assert_eq!(model.get_untracked().name, "Nurse Line");

        draft.update(|d| d.name = "Triage".into());
        assert_eq!(model.get_untracked().name, "Triage");

        draft.update(|d| d.instructions = "ignored by preview".into());
        assert_eq!(model.get_untracked().name, "Triage");
    });
}
