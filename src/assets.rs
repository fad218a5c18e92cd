//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/layout.css");
const SIDEBAR: &str = include_str!("../assets/sidebar.css");
const CARDS: &str = include_str!("../assets/cards.css");
const PAGES: &str = include_str!("../assets/pages.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Stylesheet shared by every page.
pub const SITE_CSS: &str = "site.css";
/// Styles of rendered markdown.
pub const MARKDOWN_CSS: &str = "markdown.css";
/// Stylesheets linked from every generated page, in order.
pub const STYLESHEETS: &[&str] = &[SITE_CSS, MARKDOWN_CSS];

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!("Failed to create assets directory: {}", assets_dir.display())
    })?;
    write_bundled(assets_dir, SITE_CSS, &[BASE, LAYOUT, SIDEBAR, CARDS, PAGES])?;
    write_bundled(assets_dir, MARKDOWN_CSS, &[MARKDOWN])?;
    Ok(())
}

/// All styles in one string, for pages that inline their CSS.
pub fn inline_css() -> String {
    [BASE, LAYOUT, SIDEBAR, CARDS, PAGES, MARKDOWN].join("\n")
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
