use super::*;
use careaid::DisplayMessage;

fn awaiting_reply() -> ChatState {
    let mut chat = ChatState::default();
    chat.push_user("Hours?");
    chat.begin_reply();
    chat
}

// =============================================================
// Wire events
// =============================================================

#[test]
fn wire_events_stream_then_finish_reply() {
    let mut chat = awaiting_reply();

    let event = apply_wire_event(&mut chat, r#"{"type":"delta","text":"We open "}"#).unwrap();
    assert_eq!(event, StreamEvent::Delta("We open ".into()));
    apply_wire_event(&mut chat, r#"{"type":"delta","text":"at **9am**."}"#).unwrap();
    assert!(chat.is_streaming());

    assert_eq!(apply_wire_event(&mut chat, r#"{"type":"done"}"#).unwrap(), StreamEvent::Done);
    assert!(!chat.is_streaming());
    assert_eq!(chat.messages[1], DisplayMessage::assistant("We open at **9am**."));
}

#[test]
fn done_twice_is_rejected() {
    let mut chat = awaiting_reply();
    apply_wire_event(&mut chat, r#"{"type":"done"}"#).unwrap();
    let err = apply_wire_event(&mut chat, r#"{"type":"done"}"#).unwrap_err();
    assert!(matches!(err, BackendError::Stream(StreamError::NoStreamingMessage)));
}

#[test]
fn malformed_event_leaves_reply_untouched() {
    let mut chat = awaiting_reply();
    let before = chat.clone();
    assert!(matches!(apply_wire_event(&mut chat, r#"{"type":"shout"}"#), Err(BackendError::Decode(_))));
    assert!(matches!(apply_wire_event(&mut chat, "not json"), Err(BackendError::Decode(_))));
    assert_eq!(chat, before);
}

// =============================================================
// Refused sends
// =============================================================

#[test]
fn fail_reply_fills_empty_reply_and_closes_it() {
    let mut chat = awaiting_reply();
    assert!(fail_reply(&mut chat));
    assert!(!chat.is_streaming());
    assert_eq!(chat.messages[1].content, SEND_FAILED_REPLY);
}

#[test]
fn fail_reply_keeps_partial_text() {
    let mut chat = awaiting_reply();
    apply_wire_event(&mut chat, r#"{"type":"delta","text":"We open"}"#).unwrap();
    assert!(fail_reply(&mut chat));
    assert_eq!(chat.messages[1].content, "We open");
    assert!(!chat.is_streaming());
}

#[test]
fn fail_reply_without_pending_reply_is_noop() {
    let mut chat = ChatState::default();
    chat.push_user("Hi");
    let before = chat.clone();
    assert!(!fail_reply(&mut chat));
    assert_eq!(chat, before);
}
