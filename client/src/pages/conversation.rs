//! Public conversation surface for a saved assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the page the direct link, the iframe and the widget all open. The
//! conversation backend is an external collaborator: it receives the user's
//! text through `on_send` and streams the reply back by applying
//! `StreamEvent`s to the `RwSignal<ChatState>` this page renders. Without a
//! backend the composer is disabled.

use careaid::{PreviewModel, Role};
use leptos::prelude::*;

use crate::components::message_list::{MessageList, avatar_initial};
use crate::state::chat::ChatState;

#[component]
pub fn ConversationPage(
    model: PreviewModel,
    chat: RwSignal<ChatState>,
    #[prop(optional)] on_send: Option<Callback<String>>,
) -> impl IntoView {
    let PreviewModel { name, description, suggested_questions, .. } = model;
    let input = RwSignal::new(String::new());
    let connected = on_send.is_some();
    let initial = avatar_initial(&name);
    let list_name = name.clone();

    let send = move |text: String| {
        let Some(on_send) = on_send else {
            return;
        };
        let sent = chat
            .try_update(|c| {
                if c.is_streaming() || !c.push_user(&text) {
                    return false;
                }
                c.begin_reply();
                true
            })
            .unwrap_or(false);
        if sent {
            input.set(String::new());
            on_send.run(text.trim().to_owned());
        }
    };

    let questions = StoredValue::new(suggested_questions);
    let show_suggestions = move || {
        connected
            && questions.with_value(|q| !q.is_empty())
            && chat.with(|c| c.messages.iter().all(|m| m.role != Role::User))
    };
    let offline = !connected;
    let placeholder = if connected { "Type your message..." } else { "Chat is unavailable right now" };

    view! {
        <main class="chat chat--public">
            <header class="chat__header">
                <span class="chat__avatar chat__avatar--header" aria-hidden="true">{initial}</span>
                <div class="chat__identity">
                    <h1 class="chat__title">{name}</h1>
                    <p class="chat__description">{description}</p>
                </div>
            </header>

            {move || view! { <MessageList messages=chat.get().messages assistant_name=list_name.clone() /> }}

            {move || {
                show_suggestions()
                    .then(|| {
                        view! {
                            <div class="chat__suggestions">
                                {questions
                                    .get_value()
                                    .into_iter()
                                    .map(|question| {
                                        let label = question.clone();
                                        view! {
                                            <button
                                                class="chat__suggestion"
                                                type="button"
                                                on:click=move |_| send(question.clone())
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
            }}

            <form
                class="chat__composer"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    send(input.get_untracked());
                }
            >
                <input
                    class="chat__input"
                    type="text"
                    placeholder=placeholder
                    disabled=offline
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary chat__send"
                    type="submit"
                    disabled=move || offline || chat.with(ChatState::is_streaming)
                >
                    "Send"
                </button>
            </form>
        </main>
    }
}
