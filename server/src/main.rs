mod config;
mod directory;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::directory::StaticDirectory;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = ServerConfig::from_env().expect("invalid configuration");

    let directory = match &config.assistants_file {
        Some(path) => StaticDirectory::load(path).expect("failed to load assistant profiles"),
        None => StaticDirectory::default(),
    };
    if directory.is_empty() {
        tracing::warn!("no assistant profiles loaded; every conversation link will 404");
    } else {
        tracing::info!(assistants = directory.len(), "assistant directory loaded");
    }

    if !config.widget_pkg_dir.is_dir() {
        tracing::warn!(dir = %config.widget_pkg_dir.display(), "widget package missing; /widget.js will fail to load");
    }

    if config.backend_script_url.is_none() {
        tracing::info!("BACKEND_SCRIPT_URL not set; conversation surfaces are read-only");
    }

    let state = state::AppState::new(Arc::new(directory), config.public_origin.clone())
        .with_backend_script(config.backend_script_url.clone());
    let app = routes::app(state, &config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, public_origin = ?config.public_origin, "care-aid delivery server listening");
    axum::serve(listener, app).await.expect("server failed");
}
