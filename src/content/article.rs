//! Article files: YAML front matter followed by markdown.

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{DEFAULT_TAG_COLOR, PostSummary, Tag, TagCatalog};
use crate::util::{parse_timestamp, year_of};

/// Front matter of an article file.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub posted_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// A blog article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub posted_at: String,
    pub updated_at: Option<String>,
    pub tags: Vec<Tag>,
    pub description: String,
    pub content: String,
}

impl Article {
    /// Builds the stand-in article used by the preview command.
    pub fn preview(content: impl Into<String>) -> Self {
        Self {
            slug: "preview".to_string(),
            title: "preview".to_string(),
            posted_at: String::new(),
            updated_at: None,
            tags: vec![Tag::new("preview", DEFAULT_TAG_COLOR, "")],
            description: String::new(),
            content: content.into(),
        }
    }

    /// Summary used for cards and post references.
    pub fn summary(&self) -> PostSummary {
        PostSummary::new(
            self.slug.clone(),
            self.title.clone(),
            self.posted_at.clone(),
            self.tags.clone(),
        )
    }

    /// Publication timestamp, if `posted_at` parses.
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.posted_at)
    }

    /// Year of publication, if `posted_at` parses.
    pub fn year(&self) -> Option<i32> {
        year_of(&self.posted_at)
    }

    /// Returns false for articles scheduled after `now`.
    ///
    /// Articles whose date cannot be parsed are treated as published.
    pub fn is_published(&self, now: NaiveDateTime) -> bool {
        self.published_at().is_none_or(|posted| posted <= now)
    }
}

/// Splits `---` delimited front matter from the markdown body.
///
/// # Returns
///
/// `(front_matter, body)`, or None if the text has no front matter block
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rest = text.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Parses an article file's text.
///
/// # Arguments
///
/// * `slug`: Article identifier (file stem)
/// * `text`: Full file content
/// * `tags`: Catalog used to resolve tag colors
///
/// # Errors
///
/// Returns error if front matter is missing or lacks required fields.
pub fn parse_article(slug: &str, text: &str, tags: &TagCatalog) -> Result<Article> {
    let Some((yaml, body)) = split_front_matter(text) else {
        bail!("Article {} has no front matter", slug);
    };

    let front: FrontMatter = serde_yaml::from_str(yaml)
        .with_context(|| format!("Invalid front matter in article {}", slug))?;

    Ok(Article {
        slug: slug.to_string(),
        title: front.title,
        posted_at: front.posted_at,
        updated_at: front.updated_at,
        tags: front.tags.iter().map(|name| tags.resolve(name)).collect(),
        description: front.description,
        content: body.to_string(),
    })
}

/// Loads every `*.md` article in a directory.
///
/// Files with broken front matter are skipped with a warning. The result is
/// sorted newest first.
///
/// # Errors
///
/// Returns error if the directory cannot be read.
pub fn load_articles(dir: impl AsRef<Path>, tags: &TagCatalog) -> Result<Vec<Article>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read articles directory {}", dir.display()))?;

    let mut articles = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %path.display(), "Skipping article with non UTF-8 name");
            continue;
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read article {}", path.display()))?;

        match parse_article(slug, &text, tags) {
            Ok(article) => articles.push(article),
            Err(e) => tracing::warn!(path = %path.display(), "Skipping article: {:#}", e),
        }
    }

    articles.sort_by(|a, b| {
        b.published_at()
            .cmp(&a.published_at())
            .then_with(|| b.slug.cmp(&a.slug))
    });

    Ok(articles)
}
