//! Operator editor shell.

use axum::extract::{Query, State};
use axum::response::Html;
use careaid::Slug;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EditorQuery {
    pub slug: Option<String>,
}

/// `GET /app/editor[?slug=…]`
///
/// With a slug, the saved profile is embedded so the editor opens on it.
pub async fn editor(State(state): State<AppState>, Query(query): Query<EditorQuery>) -> Result<Html<String>, ApiError> {
    let profile = match query.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => {
            let slug = Slug::parse(raw)?;
            let profile = state.directory.find(&slug).await?;
            Some(profile.ok_or_else(|| ApiError::NotFound(slug.to_string()))?)
        }
        None => None,
    };
    client::ssr::editor_document(profile.as_ref())
        .map(Html)
        .map_err(|err| ApiError::Render(err.to_string()))
}
