//! Chat preview: how an assistant will look to end users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a resolved [`PreviewModel`] in order: identity header, welcome
//! messages, then suggested questions. The preview is display-only. Its
//! suggestions and composer are disabled and nothing here sends requests.

use careaid::PreviewModel;
use leptos::prelude::*;

use crate::components::message_list::{MessageList, avatar_initial};
use crate::state::preview::use_preview_model;

#[component]
pub fn ChatPreview(#[prop(into)] model: Signal<PreviewModel>) -> impl IntoView {
    let name = move || model.with(|m| m.name.clone());
    let description = move || model.with(|m| m.description.clone());
    let initial = move || model.with(|m| avatar_initial(&m.name));

    view! {
        <section class="chat chat--preview" aria-label="Chat preview">
            <header class="chat__header">
                <span class="chat__avatar chat__avatar--header" aria-hidden="true">{initial}</span>
                <div class="chat__identity">
                    <h2 class="chat__title">{name}</h2>
                    <p class="chat__description">{description}</p>
                </div>
            </header>

            {move || {
                let PreviewModel { name, welcome_messages, .. } = model.get();
                (!welcome_messages.is_empty())
                    .then(|| view! { <MessageList messages=welcome_messages assistant_name=name /> })
            }}

            {move || {
                let questions = model.with(|m| m.suggested_questions.clone());
                (!questions.is_empty())
                    .then(|| {
                        view! {
                            <div class="chat__suggestions">
                                {questions
                                    .into_iter()
                                    .map(|question| {
                                        view! {
                                            <button
                                                class="chat__suggestion"
                                                type="button"
                                                disabled=true
                                                tabindex="-1"
                                                aria-disabled="true"
                                            >
                                                {question}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
            }}

            <div class="chat__composer chat__composer--disabled">
                <input class="chat__input" type="text" placeholder="Type your message..." disabled=true />
                <button class="btn btn--primary chat__send" type="button" disabled=true>
                    "Send"
                </button>
            </div>
        </section>
    }
}

/// Preview bound to the editing session's draft (defaults when none).
#[component]
pub fn LivePreview() -> impl IntoView {
    let model = use_preview_model();
    view! { <ChatPreview model=model /> }
}
