//! Preview metadata of external pages shown in embed-link cards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Title, description and image of an external page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Link metadata keyed by URL, loaded from `fixed/external_metadata.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ExternalMetadata(HashMap<String, LinkMetadata>);

impl ExternalMetadata {
    /// Loads the metadata file, or an empty table when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read link metadata {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid link metadata {}", path.display()))
    }

    pub fn insert(&mut self, url: impl Into<String>, metadata: LinkMetadata) {
        self.0.insert(url.into(), metadata);
    }

    pub fn get(&self, url: &str) -> Option<&LinkMetadata> {
        self.0.get(url)
    }
}
