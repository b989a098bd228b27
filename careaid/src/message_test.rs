use super::*;

#[test]
fn constructors_set_role_and_flag() {
    let user = DisplayMessage::user("hi");
    assert_eq!(user.role, Role::User);
    assert!(!user.is_streaming);

    let pending = DisplayMessage::streaming_assistant();
    assert_eq!(pending.role, Role::Assistant);
    assert!(pending.is_streaming);
    assert!(pending.content.is_empty());
}

#[test]
fn deltas_accumulate_until_done() {
    let mut msg = DisplayMessage::streaming_assistant();
    msg.apply(&StreamEvent::Delta("Hel".into())).unwrap();
    msg.apply(&StreamEvent::Delta("lo".into())).unwrap();
    assert_eq!(msg.content, "Hello");
    assert!(msg.is_streaming);

    msg.apply(&StreamEvent::Done).unwrap();
    assert!(!msg.is_streaming);
}

#[test]
fn streaming_flag_transitions_only_once() {
    let mut msg = DisplayMessage::streaming_assistant();
    msg.finish_streaming().unwrap();
    assert_eq!(msg.finish_streaming(), Err(StreamError::AlreadyFinished));
    assert!(!msg.is_streaming);
}

#[test]
fn finished_message_rejects_more_text() {
    let mut msg = DisplayMessage::assistant("final");
    assert_eq!(msg.push_delta(" extra"), Err(StreamError::AlreadyFinished));
    assert_eq!(msg.content, "final");
}

#[test]
fn role_serializes_lowercase() {
    let json = serde_json::to_string(&DisplayMessage::user("x")).unwrap();
    assert!(json.contains(r#""role":"user""#));
    assert_eq!(Role::Assistant.as_str(), "assistant");
}

#[test]
fn stream_event_wire_shape() {
    let delta: StreamEvent = serde_json::from_str(r#"{"type":"delta","text":"abc"}"#).unwrap();
    assert_eq!(delta, StreamEvent::Delta("abc".into()));
    let done: StreamEvent = serde_json::from_str(r#"{"type":"done"}"#).unwrap();
    assert_eq!(done, StreamEvent::Done);
}

#[test]
fn missing_streaming_flag_defaults_to_false() {
    let msg: DisplayMessage = serde_json::from_str(r#"{"role":"assistant","content":"hey"}"#).unwrap();
    assert!(!msg.is_streaming);
}
