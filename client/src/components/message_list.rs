//! Grouped, formatted message bubbles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the chat preview and the public conversation surface. Grouping
//! decides corner shape and avatar placement; the formatter splits content
//! into plain and bold runs rendered as text nodes, never as HTML.

use careaid::group::GroupPosition;
use careaid::{DisplayMessage, Role, Segment, format, group};
use leptos::prelude::*;

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

/// Trailing decoration of a message while its reply is arriving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamIndicator {
    None,
    /// Streaming with no content yet.
    Typing,
    /// Streaming with partial content.
    Caret,
}

#[must_use]
pub fn indicator(message: &DisplayMessage) -> StreamIndicator {
    match (message.is_streaming, message.content.is_empty()) {
        (false, _) => StreamIndicator::None,
        (true, true) => StreamIndicator::Typing,
        (true, false) => StreamIndicator::Caret,
    }
}

#[must_use]
pub fn row_class(role: Role, position: GroupPosition) -> String {
    let mut class = format!("chat__row chat__row--{}", role.as_str());
    if position.is_last_in_group {
        class.push_str(" chat__row--group-end");
    }
    class
}

#[must_use]
pub fn bubble_class(role: Role, position: GroupPosition) -> String {
    format!("chat__bubble chat__bubble--{} chat__bubble--{}", role.as_str(), position.bubble_shape().css_modifier())
}

/// Single-letter avatar for the assistant, from its display name.
#[must_use]
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "A".to_owned(), |c| c.to_uppercase().collect())
}

/// Render `messages` in order with grouping applied.
#[component]
pub fn MessageList(messages: Vec<DisplayMessage>, #[prop(into)] assistant_name: String) -> impl IntoView {
    let positions = group(&messages);
    let avatar = avatar_initial(&assistant_name);

    view! {
        <div class="chat__messages">
            {messages
                .into_iter()
                .zip(positions)
                .map(|(message, position)| {
                    view! { <MessageBubble message=message position=position avatar=avatar.clone() /> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn MessageBubble(message: DisplayMessage, position: GroupPosition, avatar: String) -> impl IntoView {
    let row = row_class(message.role, position);
    let bubble = bubble_class(message.role, position);
    let trailing = indicator(&message);
    let is_assistant = message.role == Role::Assistant;
    let segments = format(&message.content);

    view! {
        <div class=row>
            {is_assistant
                .then(|| {
                    if position.show_avatar {
                        view! { <span class="chat__avatar" aria-hidden="true">{avatar}</span> }.into_any()
                    } else {
                        view! { <span class="chat__avatar chat__avatar--spacer"></span> }.into_any()
                    }
                })}
            <div class=bubble>
                {segments
                    .into_iter()
                    .map(|segment| match segment {
                        Segment::Plain(text) => view! { <span>{text}</span> }.into_any(),
                        Segment::Bold(text) => view! { <strong>{text}</strong> }.into_any(),
                    })
                    .collect::<Vec<_>>()}
                {match trailing {
                    StreamIndicator::None => None,
                    StreamIndicator::Typing => Some(
                        view! {
                            <span class="chat__typing" aria-label="Assistant is typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </span>
                        }
                            .into_any(),
                    ),
                    StreamIndicator::Caret => Some(view! { <span class="chat__caret"></span> }.into_any()),
                }}
            </div>
        </div>
    }
}
