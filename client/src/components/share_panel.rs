//! Share panel listing the distribution artifacts for a saved assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Artifacts are derived from the slug and page origin on every render and
//! never cached, so they always reflect the current slug. Each artifact has a
//! copy button; the outcome shows as a notice next to that artifact and
//! clears after [`NOTICE_MS`].

use careaid::share::{ArtifactKind, DistributionArtifact};
use careaid::{Slug, generate};
use leptos::prelude::*;

use crate::util::clipboard::CopyStatus;

#[cfg(test)]
#[path = "share_panel_test.rs"]
mod share_panel_test;

pub const NOTICE_MS: u64 = 2_000;

/// Artifacts for `slug`, or none when the assistant has not been saved.
#[must_use]
pub fn artifacts_for(origin: &str, slug: Option<&Slug>) -> Vec<DistributionArtifact> {
    slug.map(|slug| generate(origin, slug).to_vec()).unwrap_or_default()
}

#[component]
pub fn SharePanel(#[prop(into)] slug: Signal<Option<Slug>>, origin: String) -> impl IntoView {
    let status = RwSignal::new(None::<(ArtifactKind, CopyStatus)>);

    view! {
        <section class="share-panel">
            <h3 class="share-panel__title">"Share"</h3>
            {move || {
                let artifacts = artifacts_for(&origin, slug.get().as_ref());
                if artifacts.is_empty() {
                    return view! {
                        <p class="share-panel__empty">"Save this assistant to get its share links."</p>
                    }
                        .into_any();
                }
                artifacts
                    .into_iter()
                    .map(|artifact| view! { <ArtifactRow artifact=artifact status=status /> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn ArtifactRow(artifact: DistributionArtifact, status: RwSignal<Option<(ArtifactKind, CopyStatus)>>) -> impl IntoView {
    let DistributionArtifact { kind, text } = artifact;
    let text = StoredValue::new(text);

    let on_copy = move |_| {
        let value = text.get_value();
        leptos::task::spawn_local(async move {
            let outcome = CopyStatus::from(crate::util::clipboard::copy_text(&value).await);
            #[cfg(feature = "hydrate")]
            {
                if let CopyStatus::Failed(err) = &outcome {
                    log::warn!("copy {} failed: {err}", kind.label());
                }
            }
            status.set(Some((kind, outcome.clone())));

            #[cfg(feature = "hydrate")]
            {
                gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_MS)).await;
                status.update(|current| {
                    if current.as_ref().is_some_and(|(k, s)| *k == kind && *s == outcome) {
                        *current = None;
                    }
                });
            }
        });
    };

    let notice = move || {
        status.with(|current| match current {
            Some((k, s)) if *k == kind => Some(view! {
                <span class="share-panel__notice" class:share-panel__notice--error=s.is_error()>
                    {s.notice()}
                </span>
            }),
            _ => None,
        })
    };

    view! {
        <div class="share-panel__artifact">
            <div class="share-panel__row">
                <span class="share-panel__label">{kind.label()}</span>
                <button class="btn share-panel__copy" type="button" on:click=on_copy>
                    "Copy"
                </button>
                {notice}
            </div>
            <textarea class="share-panel__text" readonly=true rows="2">
                {text.get_value()}
            </textarea>
        </div>
    }
}
