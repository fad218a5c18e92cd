//! Site data files under `contents/`.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{ExternalMetadata, RelatedPosts, TagCatalog};

/// Relative path of an asset, as written in the data files (`{"path": ...}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssetPath {
    #[serde(default)]
    pub path: String,
}

/// Social network entry shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnsLink {
    pub name: String,
    pub url: String,
}

/// Site wide settings from `contents/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub blog_title: String,
    pub author_name: String,
    #[serde(default)]
    pub author_introduction: String,
    #[serde(default)]
    pub site_introduction: String,
    #[serde(default)]
    pub issues_page_url: String,
    #[serde(default)]
    pub sns: Vec<SnsLink>,
    #[serde(default)]
    pub avatar_image_url: AssetPath,
    #[serde(default)]
    pub domain: String,
}

impl SiteConfig {
    /// Description used for articles that do not provide one.
    pub fn default_description(&self) -> String {
        format!("{}の記事です。", self.author_name)
    }
}

/// Index page text from `contents/fixed/index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexData {
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub site_header_title: String,
}

impl Default for IndexData {
    fn default() -> Self {
        Self {
            site_description: "index.json site_description".to_string(),
            site_header_title: "index.json site_header_title".to_string(),
        }
    }
}

impl IndexData {
    /// Loads index data, falling back to placeholders on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_json(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Using default index data: {:#}", e);
                Self::default()
            }
        }
    }
}

/// A skill card on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub title: String,
    #[serde(default)]
    pub image_url: AssetPath,
    /// Markdown text.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Portfolio data from `contents/fixed/profile.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Profile {
    /// Loads the profile, or an empty one when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but is not valid YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        serde_yaml::from_str(&text).with_context(|| format!("Invalid profile {}", path.display()))
    }

    /// Distinct skill tags in first-seen order.
    pub fn skill_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.skills.iter().flat_map(|skill| &skill.tags) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }
}

/// Everything under `contents/` except the articles themselves.
#[derive(Debug, Clone)]
pub struct SiteData {
    pub root: PathBuf,
    pub config: SiteConfig,
    pub index: IndexData,
    pub profile: Profile,
    pub tags: TagCatalog,
    pub related: RelatedPosts,
    pub metadata: ExternalMetadata,
}

impl SiteData {
    /// Loads all site data from a contents directory.
    ///
    /// Only `config.json` is required; the files under `fixed/` are optional.
    ///
    /// # Errors
    ///
    /// Returns error if `config.json` is missing or any present file is invalid.
    pub fn load(contents: impl AsRef<Path>) -> Result<Self> {
        let root = contents.as_ref().to_path_buf();
        let fixed = root.join("fixed");

        let config: SiteConfig = read_json(root.join("config.json"))?;
        let data = Self {
            index: IndexData::load_or_default(fixed.join("index.json")),
            profile: Profile::load(fixed.join("profile.yaml"))?,
            tags: TagCatalog::load(fixed.join("tags.yaml"))?,
            related: RelatedPosts::load(fixed.join("related.json"))?,
            metadata: ExternalMetadata::load(fixed.join("external_metadata.json"))?,
            config,
            root,
        };

        tracing::debug!(
            root = %data.root.display(),
            skills = data.profile.skills.len(),
            "Loaded site data"
        );
        Ok(data)
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.root.join("articles")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join("static")
    }
}

fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}
