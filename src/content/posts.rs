//! Post summaries and the post reference index.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use super::Tag;

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#(\d+)\s*$").expect("shortcode pattern is valid"));

/// Lightweight view of an article used for cards and embeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub posted_at: String,
    pub tags: Vec<Tag>,
}

impl PostSummary {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        posted_at: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            posted_at: posted_at.into(),
            tags,
        }
    }
}

/// Read-only lookup of post summaries by short identifier.
///
/// The identifier is the article slug, a short number such as `"12"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostIndex {
    posts: HashMap<String, PostSummary>,
}

impl PostIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a summary under its slug.
    pub fn insert(&mut self, post: PostSummary) {
        self.posts.insert(post.slug.clone(), post);
    }

    /// Looks up a post by short identifier.
    pub fn get(&self, id: &str) -> Option<&PostSummary> {
        self.posts.get(id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Returns a new index holding only the given slugs.
    ///
    /// Slugs that are not in this index are ignored.
    pub fn restricted_to<'s>(&self, slugs: impl IntoIterator<Item = &'s str>) -> Self {
        slugs
            .into_iter()
            .filter_map(|slug| self.get(slug).cloned())
            .collect()
    }
}

impl FromIterator<PostSummary> for PostIndex {
    fn from_iter<I: IntoIterator<Item = PostSummary>>(iter: I) -> Self {
        let mut index = Self::new();
        for post in iter {
            index.insert(post);
        }
        index
    }
}

/// Returns the identifier of a `#<digits>` shortcode.
///
/// Surrounding whitespace is allowed; anything else disqualifies the text.
///
/// # Examples
///
/// ```
/// use folio::content::shortcode_id;
///
/// assert_eq!(shortcode_id("#42"), Some("42"));
/// assert_eq!(shortcode_id("  #7 \n"), Some("7"));
/// assert_eq!(shortcode_id("see #42"), None);
/// ```
pub fn shortcode_id(text: &str) -> Option<&str> {
    SHORTCODE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Collects the identifiers of all posts embedded with a shortcode line.
///
/// Order of first appearance is kept and duplicates are dropped.
pub fn extract_article_links(content: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for line in content.lines() {
        if let Some(id) = shortcode_id(line)
            && !ids.iter().any(|existing| existing == id)
        {
            ids.push(id.to_string());
        }
    }
    ids
}

/// Hand-picked related articles, keyed by article slug.
///
/// Loaded from `fixed/related.json`: `{ "12": ["3", "7"] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RelatedPosts(HashMap<String, Vec<String>>);

impl RelatedPosts {
    /// Loads the related posts file, or an empty table when it does not exist.
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
            .with_context(|| format!("Failed to read related posts {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid related posts {}", path.display()))
    }

    /// Related slugs of an article, empty when none are listed.
    pub fn for_slug(&self, slug: &str) -> &[String] {
        self.0.get(slug).map(Vec::as_slice).unwrap_or(&[])
    }
}
