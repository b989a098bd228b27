//! Public conversation surface, the target of every share artifact.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use careaid::Slug;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /public/care-aid/{slug}`
///
/// Unknown or malformed slugs get the HTML not-found page, since visitors
/// land here from links and iframes rather than API clients.
pub async fn conversation(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Response, ApiError> {
    let Ok(slug) = Slug::parse(&raw) else {
        return Ok(not_found());
    };
    match state.directory.find(&slug).await? {
        Some(profile) => {
            tracing::debug!(%slug, backend = state.backend_script_url.is_some(), "rendering conversation surface");
            let html = client::ssr::conversation_document(&profile, state.backend_script_url.as_deref())
                .map_err(|err| ApiError::Render(err.to_string()))?;
            Ok(Html(html).into_response())
        }
        None => {
            tracing::info!(%slug, "conversation requested for unknown assistant");
            Ok(not_found())
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(client::ssr::not_found_document())).into_response()
}
