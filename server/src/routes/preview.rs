//! Server-rendered chat preview for a draft.

use axum::Json;
use axum::response::Html;
use careaid::AssistantPreviewDraft;

/// `POST /api/preview`
///
/// Renders whatever subset of the draft was sent; missing fields fall back
/// to the preview defaults. Never fails on content.
pub async fn preview(Json(draft): Json<AssistantPreviewDraft>) -> Html<String> {
    Html(client::ssr::preview_fragment(Some(&draft)))
}
