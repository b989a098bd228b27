use super::*;
use careaid::{AssistantPreviewDraft, Role};

// =============================================================
// Seeding
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.is_streaming());
}

#[test]
fn seeded_from_welcome_messages() {
    let draft = AssistantPreviewDraft {
        welcome_messages: Some(vec!["Hello".into(), "Ask me anything".into()]),
        ..Default::default()
    };
    let state = ChatState::from_model(&PreviewModel::resolve(Some(&draft)));
    assert_eq!(state.messages.len(), 2);
    assert!(state.messages.iter().all(|m| m.role == Role::Assistant));
}

// =============================================================
// Exchange
// =============================================================

#[test]
fn blank_user_input_is_ignored() {
    let mut state = ChatState::default();
    assert!(!state.push_user("   "));
    assert!(state.push_user("  Hi  "));
    assert_eq!(state.messages, vec![DisplayMessage::user("Hi")]);
}

#[test]
fn streamed_reply_completes_once() {
    let mut state = ChatState::default();
    state.push_user("Hours?");
    state.begin_reply();
    assert!(state.is_streaming());

    state.apply(&StreamEvent::Delta("We open ".into())).unwrap();
    state.apply(&StreamEvent::Delta("at **9am**.".into())).unwrap();
    state.apply(&StreamEvent::Done).unwrap();

    assert!(!state.is_streaming());
    assert_eq!(state.messages[1].content, "We open at **9am**.");
    assert_eq!(state.apply(&StreamEvent::Done), Err(StreamError::NoStreamingMessage));
}

#[test]
fn events_without_reply_are_rejected() {
    let mut state = ChatState::default();
    state.push_user("Hi");
    assert_eq!(state.apply(&StreamEvent::Delta("x".into())), Err(StreamError::NoStreamingMessage));
    assert_eq!(state.messages.len(), 1);
}
