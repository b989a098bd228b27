//! Read access to saved assistant profiles.
//!
//! DESIGN
//! ======
//! Profiles are owned by the persistence layer. The delivery server only
//! looks them up by slug, through the [`AssistantDirectory`] trait so the
//! backing store can be swapped (and mocked in tests). The bundled
//! [`StaticDirectory`] is loaded once at startup from a YAML file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use careaid::{AssistantProfile, Slug};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed assistant profiles: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate assistant slug {0}")]
    DuplicateSlug(Slug),
}

/// Lookup of saved assistants by slug.
#[async_trait::async_trait]
pub trait AssistantDirectory: Send + Sync {
    /// Find the profile for `slug`. `Ok(None)` when no such assistant exists.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the backing store cannot be queried.
    async fn find(&self, slug: &Slug) -> Result<Option<AssistantProfile>, DirectoryError>;
}

/// In-memory directory, immutable after construction.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    profiles: HashMap<Slug, AssistantProfile>,
}

impl StaticDirectory {
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateSlug`] if two profiles share a slug.
    pub fn from_profiles(profiles: Vec<AssistantProfile>) -> Result<Self, DirectoryError> {
        let mut map = HashMap::with_capacity(profiles.len());
        for profile in profiles {
            if map.contains_key(&profile.slug) {
                return Err(DirectoryError::DuplicateSlug(profile.slug));
            }
            map.insert(profile.slug.clone(), profile);
        }
        Ok(Self { profiles: map })
    }

    /// Parse a YAML sequence of profiles. Invalid slugs fail the parse.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] for malformed YAML or duplicate slugs.
    pub fn from_yaml(yaml: &str) -> Result<Self, DirectoryError> {
        let profiles: Vec<AssistantProfile> = serde_yaml::from_str(yaml)?;
        Self::from_profiles(profiles)
    }

    /// # Errors
    ///
    /// Returns [`DirectoryError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let yaml =
            std::fs::read_to_string(path).map_err(|source| DirectoryError::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml(&yaml)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait::async_trait]
impl AssistantDirectory for StaticDirectory {
    async fn find(&self, slug: &Slug) -> Result<Option<AssistantProfile>, DirectoryError> {
        Ok(self.profiles.get(slug).cloned())
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
