//! Operator editor: assistant form beside its live preview and share links.

use careaid::draft::{DEFAULT_DESCRIPTION, DEFAULT_NAME, MAX_SUGGESTED_QUESTIONS};
use leptos::prelude::*;

use crate::components::chat_preview::LivePreview;
use crate::components::share_panel::SharePanel;
use crate::state::draft::{AssistantDraft, DraftList};
use crate::util::common_lists;

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Hint under the suggested-questions list.
#[must_use]
pub fn suggestion_hint(count: usize) -> String {
    if count > MAX_SUGGESTED_QUESTIONS {
        format!("Only the first {MAX_SUGGESTED_QUESTIONS} questions are shown to visitors.")
    } else {
        format!("Up to {MAX_SUGGESTED_QUESTIONS} questions are shown to visitors.")
    }
}

/// Editor page. Provides the `RwSignal<AssistantDraft>` context the live
/// preview observes.
#[component]
pub fn EditorPage(draft: AssistantDraft, origin: String) -> impl IntoView {
    let draft = RwSignal::new(draft);
    provide_context(draft);

    let slug = Signal::derive(move || draft.with(|d| d.slug.clone()));
    let question_count = move || draft.with(|d| d.suggested_questions.len());

    view! {
        <div class="editor">
            <form class="editor__form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <label class="editor__field">
                    <span class="editor__label">"Name"</span>
                    <input
                        class="editor__input"
                        type="text"
                        placeholder=DEFAULT_NAME
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label class="editor__field">
                    <span class="editor__label">"Description"</span>
                    <textarea
                        class="editor__input editor__input--multiline"
                        rows="2"
                        placeholder=DEFAULT_DESCRIPTION
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>

                <ListField list=DraftList::WelcomeMessages label="Welcome messages" add_label="Add message" />
                <ListField list=DraftList::SuggestedQuestions label="Suggested questions" add_label="Add question" />
                <p class="editor__hint">{move || suggestion_hint(question_count())}</p>

                <label class="editor__field">
                    <span class="editor__label">"Instructions"</span>
                    <textarea
                        class="editor__input editor__input--multiline"
                        rows="6"
                        placeholder="How should the assistant answer?"
                        prop:value=move || draft.with(|d| d.instructions.clone())
                        on:input=move |ev| draft.update(|d| d.instructions = event_target_value(&ev))
                    ></textarea>
                </label>
            </form>

            <aside class="editor__side">
                <LivePreview />
                <SharePanel slug=slug origin=origin />
            </aside>
        </div>
    }
}

/// Editable list of entries with saved common entries for reuse.
///
/// Rows are rebuilt only when the number of entries changes, so typing into
/// an entry keeps its input (and focus) in place.
#[component]
fn ListField(list: DraftList, label: &'static str, add_label: &'static str) -> impl IntoView {
    let draft = expect_context::<RwSignal<AssistantDraft>>();
    let saved = RwSignal::new(common_lists::load(list));
    let count = Memo::new(move |_| draft.with(|d| d.list(list).len()));

    let entry_at = move |index: usize| draft.with(|d| d.list(list).get(index).cloned().unwrap_or_default());

    view! {
        <fieldset class="editor__list">
            <legend class="editor__label">{label}</legend>
            {move || {
                (0..count.get())
                    .map(|index| {
                        view! {
                            <div class="editor__list-row">
                                <input
                                    class="editor__input"
                                    type="text"
                                    prop:value=move || entry_at(index)
                                    on:input=move |ev| {
                                        draft.update(|d| d.set_entry(list, index, event_target_value(&ev)));
                                    }
                                />
                                <button
                                    class="btn editor__keep"
                                    type="button"
                                    title="Save for reuse"
                                    on:click=move |_| saved.set(common_lists::remember(list, &entry_at(index)))
                                >
                                    "Save"
                                </button>
                                <button
                                    class="btn editor__remove"
                                    type="button"
                                    on:click=move |_| draft.update(|d| d.remove_entry(list, index))
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button class="btn editor__add" type="button" on:click=move |_| draft.update(|d| d.push_entry(list, ""))>
                {add_label}
            </button>
            {move || {
                let entries = saved.with(|s| s.entries().to_vec());
                (!entries.is_empty())
                    .then(|| {
                        view! {
                            <div class="editor__common">
                                <span class="editor__common-label">"Saved"</span>
                                {entries
                                    .into_iter()
                                    .map(|entry| {
                                        let insert = entry.clone();
                                        let forget = entry.clone();
                                        view! {
                                            <span class="editor__chip">
                                                <button
                                                    class="editor__chip-insert"
                                                    type="button"
                                                    on:click=move |_| draft.update(|d| d.push_entry(list, insert.clone()))
                                                >
                                                    {entry}
                                                </button>
                                                <button
                                                    class="editor__chip-forget"
                                                    type="button"
                                                    aria-label="Forget saved entry"
                                                    on:click=move |_| saved.set(common_lists::forget(list, &forget))
                                                >
                                                    "×"
                                                </button>
                                            </span>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
            }}
        </fieldset>
    }
}
