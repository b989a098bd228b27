//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the three delivery surfaces (direct link page,
//! iframe target, widget loader + package), the operator editor shell and
//! the small JSON/HTML API behind them.

pub mod editor;
pub mod preview;
pub mod public;
pub mod share;
pub mod widget;

use axum::Router;
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::routing::{get, post};
use careaid::paths::{CONVERSATION_PATH_PREFIX, WIDGET_SCRIPT_PATH, origin_of};
use client::ssr::CLIENT_PKG_PATH;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let embed_cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET, Method::HEAD]);

    let embed = Router::new()
        .route(WIDGET_SCRIPT_PATH, get(widget::widget_script))
        .nest_service(widget::WIDGET_PKG_PATH, ServeDir::new(&config.widget_pkg_dir))
        .layer(embed_cors);

    Router::new()
        .route(&format!("{CONVERSATION_PATH_PREFIX}/{{slug}}"), get(public::conversation))
        .route("/app/editor", get(editor::editor))
        .route("/api/assistants/{slug}/share", get(share::share_links))
        .route("/api/preview", post(preview::preview))
        .route("/healthz", get(healthz))
        .with_state(state)
        .nest_service(CLIENT_PKG_PATH, ServeDir::new(&config.client_pkg_dir))
        .merge(embed)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Origin to embed in share artifacts.
///
/// The configured public origin wins. Otherwise the request's `Host` header
/// is used, with the scheme from `X-Forwarded-Proto` (default `http`).
pub(crate) fn request_origin(configured: Option<&str>, headers: &HeaderMap) -> Result<String, ApiError> {
    if let Some(origin) = configured {
        return Ok(origin.to_owned());
    }
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or(ApiError::MissingHost)?;
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|p| matches!(*p, "http" | "https"))
        .unwrap_or("http");
    origin_of(&format!("{scheme}://{host}")).map_err(|_| ApiError::MissingHost)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
