//! Shared test utilities for integration tests.
//!
//! Provides a temporary contents directory with site settings, data files
//! and a handful of articles, used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const CONFIG_JSON: &str = r#"{
    "blog_title": "Field Notes",
    "author_name": "Robin",
    "author_introduction": "Writes about systems.",
    "site_introduction": "Robin's notes on Rust and the web.",
    "issues_page_url": "https://github.com/robin/notes/issues",
    "sns": [
        {"name": "GitHub", "url": "https://github.com/robin"},
        {"name": "Mastodon", "url": "https://social.example/@robin"}
    ],
    "avatar_image_url": {"path": ""},
    "domain": "notes.example.com"
}"#;

pub const INDEX_JSON: &str = r#"{
    "site_description": "Hello, **welcome** to my notes.",
    "site_header_title": "Robin's Field Notes"
}"#;

pub const TAGS_YAML: &str = "rust:\n  color: dea584\n  description: The Rust language\ndiary:\n  color: 4caf50\n";

pub const PROFILE_YAML: &str = r#"skills:
  - title: Rust
    image_url:
      path: static/images/rust.png
    description: Systems programming with **Rust**
    tags: [language, backend]
  - title: TypeScript
    description: Frontends
    tags: [language, frontend]
"#;

pub const RELATED_JSON: &str = r#"{ "2": ["1"] }"#;

pub const METADATA_JSON: &str = r#"{
    "https://www.rust-lang.org/": {
        "title": "Rust Programming Language",
        "description": "A language empowering everyone",
        "image": "https://www.rust-lang.org/static/images/rust-social.jpg"
    }
}"#;

pub const ARTICLE_1: &str = r#"---
title: First steps
posted_at: 2022-04-01T09:00:00+09:00
tags: [rust]
description: Getting started
---

## Setup

Install the toolchain.

https://www.rust-lang.org/
"#;

pub const ARTICLE_2: &str = r#"---
title: Borrowing
posted_at: 2023-02-10 12:00
updated_at: 2023-03-01
tags: [rust, diary]
---

## Intro

See the earlier post:

#1

#99

```rust
fn main() {}
```

> Quoted text

| Name | Value |
| ---- | ----- |
| a    | 1     |
"#;

pub const ARTICLE_FUTURE: &str = r#"---
title: Not yet
posted_at: 2999-01-01
tags: [diary]
---

Scheduled post.
"#;

pub const ARTICLE_BROKEN: &str = "---\ntitle: [unclosed\n---\n\nBody\n";

/// Writes a file below a root directory, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Creates a temporary contents directory with a complete site.
///
/// Holds two published articles (`1`, `2`), one scheduled far in the
/// future (`3`) and one with broken front matter (`4`).
///
/// # Errors
///
/// Returns error if any file cannot be written
pub fn create_test_contents() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();

    write_file(root, "config.json", CONFIG_JSON)?;
    write_file(root, "fixed/index.json", INDEX_JSON)?;
    write_file(root, "fixed/tags.yaml", TAGS_YAML)?;
    write_file(root, "fixed/profile.yaml", PROFILE_YAML)?;
    write_file(root, "fixed/related.json", RELATED_JSON)?;
    write_file(root, "fixed/external_metadata.json", METADATA_JSON)?;
    write_file(root, "articles/1.md", ARTICLE_1)?;
    write_file(root, "articles/2.md", ARTICLE_2)?;
    write_file(root, "articles/3.md", ARTICLE_FUTURE)?;
    write_file(root, "articles/4.md", ARTICLE_BROKEN)?;
    write_file(root, "static/favicon.ico", "ico")?;
    write_file(root, "static/images/thumbnail/1.jpg", "jpg")?;

    Ok(dir)
}

/// Creates a contents directory holding only `config.json`.
pub fn create_minimal_contents() -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "config.json", CONFIG_JSON)?;
    Ok(dir)
}
