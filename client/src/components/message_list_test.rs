use super::*;

fn position(first: bool, last: bool) -> GroupPosition {
    GroupPosition { is_first_in_group: first, is_last_in_group: last, show_avatar: last }
}

#[test]
fn indicator_tracks_streaming_and_content() {
    assert_eq!(indicator(&DisplayMessage::assistant("done")), StreamIndicator::None);
    let mut reply = DisplayMessage::streaming_assistant();
    assert_eq!(indicator(&reply), StreamIndicator::Typing);
    reply.push_delta("Hel").unwrap();
    assert_eq!(indicator(&reply), StreamIndicator::Caret);
    reply.finish_streaming().unwrap();
    assert_eq!(indicator(&reply), StreamIndicator::None);
}

#[test]
fn bubble_class_combines_role_and_shape() {
    assert_eq!(
        bubble_class(Role::Assistant, position(true, true)),
        "chat__bubble chat__bubble--assistant chat__bubble--rounded"
    );
    assert_eq!(
        bubble_class(Role::User, position(false, false)),
        "chat__bubble chat__bubble--user chat__bubble--square-both"
    );
}

#[test]
fn row_class_marks_group_end() {
    assert_eq!(row_class(Role::User, position(true, false)), "chat__row chat__row--user");
    assert_eq!(
        row_class(Role::Assistant, position(false, true)),
        "chat__row chat__row--assistant chat__row--group-end"
    );
}

#[test]
fn avatar_initial_uses_first_letter() {
    assert_eq!(avatar_initial("  nurse line"), "N");
    assert_eq!(avatar_initial(""), "A");
    assert_eq!(avatar_initial("élan"), "É");
}
