//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use careaid::paths::{OriginError, origin_of};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("invalid PUBLIC_ORIGIN: {0}")]
    InvalidOrigin(#[from] OriginError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin used in share artifacts. Derived per request when unset.
    pub public_origin: Option<String>,
    /// YAML list of assistant profiles. Empty directory when unset.
    pub assistants_file: Option<PathBuf>,
    pub widget_pkg_dir: PathBuf,
    pub client_pkg_dir: PathBuf,
    /// Script the conversation backend registers itself from. Conversation
    /// surfaces stay read-only when unset.
    pub backend_script_url: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PUBLIC_ORIGIN`: `scheme://host[:port]`, any path is dropped
    /// - `ASSISTANTS_FILE`: path to the assistant profiles YAML
    /// - `WIDGET_PKG_DIR`: default `<crate>/pkg/widget`
    /// - `CLIENT_PKG_DIR`: default `<crate>/pkg/client`
    /// - `BACKEND_SCRIPT_URL`: conversation backend script for public surfaces
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable port or origin.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let public_origin = env_non_empty("PUBLIC_ORIGIN").map(|raw| origin_of(&raw)).transpose()?;

        Ok(Self {
            port,
            public_origin,
            assistants_file: env_non_empty("ASSISTANTS_FILE").map(PathBuf::from),
            widget_pkg_dir: env_dir("WIDGET_PKG_DIR", "pkg/widget"),
            client_pkg_dir: env_dir("CLIENT_PKG_DIR", "pkg/client"),
            backend_script_url: env_non_empty("BACKEND_SCRIPT_URL"),
        })
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn env_dir(key: &str, default: &str) -> PathBuf {
    env_non_empty(key).map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(default), PathBuf::from)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
