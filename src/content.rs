//! Blog content: articles, tags and post references.
//!
//! Articles are markdown files with YAML front matter. Their summaries form
//! the post reference index that the markdown view mapper consults when it
//! meets a `#<id>` shortcode.

mod article;
mod metadata;
mod posts;
mod tags;

pub use article::{Article, FrontMatter, load_articles, parse_article, split_front_matter};
pub use metadata::{ExternalMetadata, LinkMetadata};
pub use posts::{PostIndex, PostSummary, RelatedPosts, extract_article_links, shortcode_id};
pub use tags::{DEFAULT_TAG_COLOR, Tag, TagCatalog, tag_counts};
