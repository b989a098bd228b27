//! Share artifacts for a saved assistant.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use careaid::{DistributionArtifact, Slug};
use serde::Serialize;

use super::request_origin;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShareLinks {
    pub slug: Slug,
    pub artifacts: Vec<DistributionArtifact>,
}

/// `GET /api/assistants/{slug}/share`
pub async fn share_links(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw): Path<String>,
) -> Result<Json<ShareLinks>, ApiError> {
    let slug = Slug::parse(&raw)?;
    if state.directory.find(&slug).await?.is_none() {
        return Err(ApiError::NotFound(slug.to_string()));
    }
    let origin = request_origin(state.public_origin.as_deref(), &headers)?;
    let artifacts = careaid::generate(&origin, &slug).to_vec();
    Ok(Json(ShareLinks { slug, artifacts }))
}
