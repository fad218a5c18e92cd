//! Tag metadata.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::PostSummary;

/// Color used for tags without an entry in `tags.yaml`.
pub const DEFAULT_TAG_COLOR: &str = "656565";

/// Article tag with display color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: String,
}

impl Tag {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TagEntry {
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    description: String,
}

/// Colors and descriptions of known tags, keyed by tag name.
///
/// Loaded from `fixed/tags.yaml`:
///
/// ```yaml
/// rust:
///   color: dea584
///   description: Posts about Rust
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    entries: HashMap<String, TagEntry>,
}

impl TagCatalog {
    /// Parses a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not a mapping of tag entries.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let entries: HashMap<String, TagEntry> =
            serde_yaml::from_str(text).context("Failed to parse tag catalog")?;
        Ok(Self { entries })
    }

    /// Loads the catalog file, or an empty catalog when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No tag catalog, using default colors");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tag catalog {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid tag catalog {}", path.display()))
    }

    /// Resolves a tag name into a full tag.
    pub fn resolve(&self, name: &str) -> Tag {
        match self.entries.get(name) {
            Some(entry) => Tag::new(
                name,
                entry
                    .color
                    .as_deref()
                    .map(|c| c.trim_start_matches('#'))
                    .unwrap_or(DEFAULT_TAG_COLOR),
                entry.description.clone(),
            ),
            None => Tag::new(name, DEFAULT_TAG_COLOR, ""),
        }
    }
}

/// Counts posts per tag.
///
/// # Returns
///
/// Tags with their post counts, most used first, ties by name.
pub fn tag_counts(posts: &[PostSummary]) -> Vec<(Tag, usize)> {
    let mut counts: HashMap<&str, (&Tag, usize)> = HashMap::new();
    for tag in posts.iter().flat_map(|post| &post.tags) {
        counts.entry(tag.name.as_str()).or_insert((tag, 0)).1 += 1;
    }

    let mut result: Vec<(Tag, usize)> = counts
        .into_values()
        .map(|(tag, count)| (tag.clone(), count))
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tag() {
        // Arrange
        let catalog = TagCatalog::from_yaml(
            "rust:\n  color: '#dea584'\n  description: Posts about Rust\n",
        )
        .expect("Should parse catalog");

        // Act
        let tag = catalog.resolve("rust");

        // Assert
        assert_eq!(tag.name, "rust");
        assert_eq!(tag.color, "dea584", "Leading # should be stripped");
        assert_eq!(tag.description, "Posts about Rust");
    }

    #[test]
    fn test_resolve_unknown_tag_uses_default_color() {
        // Arrange
        let catalog = TagCatalog::default();

        // Act
        let tag = catalog.resolve("misc");

        // Assert
        assert_eq!(tag, Tag::new("misc", DEFAULT_TAG_COLOR, ""));
    }

    #[test]
    fn test_entry_without_color() {
        let catalog =
            TagCatalog::from_yaml("diary:\n  description: Daily notes\n").expect("Should parse");
        assert_eq!(catalog.resolve("diary").color, DEFAULT_TAG_COLOR);
    }

    #[test]
    fn test_empty_yaml_is_empty_catalog() {
        let catalog = TagCatalog::from_yaml("  \n").expect("Empty text should parse");
        assert_eq!(catalog.resolve("x").color, DEFAULT_TAG_COLOR);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let result = TagCatalog::from_yaml("- just\n- a list\n");
        assert!(result.is_err(), "A list is not a tag catalog");
    }

    #[test]
    fn test_load_missing_file() {
        let catalog = TagCatalog::load("no/such/tags.yaml").expect("Missing file is fine");
        assert_eq!(catalog.resolve("a").color, DEFAULT_TAG_COLOR);
    }

    #[test]
    fn test_tag_counts_orders_by_usage() {
        // Arrange
        let rust = Tag::new("rust", "dea584", "");
        let web = Tag::new("web", DEFAULT_TAG_COLOR, "");
        let posts = vec![
            PostSummary::new("1", "One", "2022-01-01", vec![rust.clone()]),
            PostSummary::new("2", "Two", "2022-01-02", vec![rust.clone(), web.clone()]),
            PostSummary::new("3", "Three", "2022-01-03", vec![]),
        ];

        // Act
        let counts = tag_counts(&posts);

        // Assert
        assert_eq!(counts, vec![(rust, 2), (web, 1)]);
    }
}
