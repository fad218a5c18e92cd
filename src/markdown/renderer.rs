//! Markdown rendering facade: parse, then map.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;

use super::mapper::{Mapper, RenderContext, RenderedTree};
use super::syntax::{self, SyntaxNode};
use crate::highlight::Highlighter;

/// Renders markdown documents into rendered node trees.
///
/// Parses with GitHub Flavored Markdown extensions (tables, strikethrough,
/// autolinks, footnotes) plus dollar math, then applies the rewrite rules.
/// The renderer keeps no state between calls, so rendering the same document
/// with the same context always yields the same tree.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: Highlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures:
    /// - Tables, strikethrough, autolinks, footnotes
    /// - `$inline$` and `$$display$$` math
    /// - Raw HTML kept as nodes
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.footnotes = true;
        options.extension.math_dollars = true;

        Self {
            options,
            highlighter: Highlighter::new(),
        }
    }

    /// Parses a document into syntax nodes without rewriting.
    pub fn parse(&self, document: &str) -> Vec<SyntaxNode> {
        syntax::parse(document, &self.options)
    }

    /// Renders a document into a rendered tree.
    ///
    /// # Arguments
    ///
    /// * `document`: Markdown text
    /// * `context`: Post index and link data consulted by the rules
    ///
    /// # Returns
    ///
    /// Rendered tree; nodes that cannot be rendered become empty nodes
    pub fn render(&self, document: &str, context: &RenderContext<'_>) -> RenderedTree {
        let nodes = self.parse(document);
        Mapper::new(context, &self.highlighter).map_tree(&nodes)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(
        &self,
        path: impl AsRef<Path>,
        context: &RenderContext<'_>,
    ) -> Result<RenderedTree> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file {}", path.display()))?;
        Ok(self.render(&content, context))
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
