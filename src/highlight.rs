//! Code block highlighting with syntect.

use anyhow::{Context, Result};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Highlights code blocks into HTML with `hljs-` prefixed CSS classes.
///
/// The syntax set is loaded once and shared by every render.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights code, falling back to escaped plain text.
    ///
    /// Unknown or missing languages and highlighting failures never fail the
    /// render; the code is shown unhighlighted instead.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code of the block
    /// * `language`: Language token from the fence info string
    ///
    /// # Returns
    ///
    /// HTML safe string, with `<span class="hljs-*">` tags when highlighted
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        if code.is_empty() {
            return String::new();
        }

        let Some(syntax) = language.and_then(|lang| self.find_syntax(lang)) else {
            return escape_html(code);
        };

        match self.highlight_with(code, syntax) {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!(language = ?language, "Highlighting failed: {:#}", e);
                escape_html(code)
            }
        }
    }

    /// Returns true if the language token names a known syntax.
    pub fn supports(&self, language: &str) -> bool {
        self.find_syntax(language).is_some()
    }

    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
    }

    fn highlight_with(&self, code: &str, syntax: &SyntaxReference) -> Result<String> {
        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes HTML special characters.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }
    result
}
