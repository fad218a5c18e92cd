//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::ViewContext;
use super::footer::footer;
use super::sidebar::sidebar;
use crate::routes;

const KATEX_VERSION: &str = "0.16.11";

/// Starts KaTeX auto-render once the deferred scripts are loaded.
const KATEX_INIT: &str = r#"document.addEventListener("DOMContentLoaded", function () {
  renderMathInElement(document.body, {
    delimiters: [
      { left: "\\[", right: "\\]", display: true },
      { left: "\\(", right: "\\)", display: false }
    ]
  });
});"#;

/// Open Graph data of an article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialCard {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

/// Head metadata of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Page title without the blog title suffix.
    pub title: String,
    pub description: String,
    pub social: Option<SocialCard>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            social: None,
        }
    }

    pub fn with_social(mut self, social: SocialCard) -> Self {
        self.social = Some(social);
        self
    }
}

/// Wraps page content with standard HTML structure
///
/// Provides the head (title, description, social card meta, stylesheets,
/// KaTeX and Phosphor icons), the app bar with the sidebar drawer, and the
/// footer. The caller provides page-specific body content.
///
/// # Arguments
///
/// * `meta`: Title, description and optional social card
/// * `view`: Page context
/// * `stylesheets`: Stylesheets to link, as site routes
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(meta: &PageMeta, view: &ViewContext, stylesheets: &[&str], body: Markup) -> Markup {
    let styles = html! {
        @for stylesheet in stylesheets {
            link rel="stylesheet" href=(view.href(stylesheet));
        }
    };
    page_document(meta, view, styles, body)
}

/// Same as [`page_wrapper`] with the CSS inlined, for single file previews.
pub fn standalone_page(meta: &PageMeta, view: &ViewContext, css: &str, body: Markup) -> Markup {
    let styles = html! {
        style { (PreEscaped(css)) }
    };
    page_document(meta, view, styles, body)
}

fn page_document(meta: &PageMeta, view: &ViewContext, styles: Markup, body: Markup) -> Markup {
    let site = view.site;
    let full_title = format!("{} | {}", meta.title, site.blog_title);
    let katex = format!("https://cdn.jsdelivr.net/npm/katex@{}/dist", KATEX_VERSION);

    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                meta name="description" content=(meta.description);
                link rel="icon" href=(view.href(&routes::favicon()));
                @if let Some(social) = &meta.social {
                    meta property="og:title" content=(social.title);
                    meta property="og:description" content=(social.description);
                    meta property="og:image" content=(social.image);
                    meta property="og:type" content="article";
                    meta property="og:site_name" content=(site.blog_title);
                    meta property="og:url" content=(social.url);
                    meta name="twitter:image" content=(social.image);
                    meta name="twitter:card" content="summary_large_image";
                }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                link rel="stylesheet" href=(format!("{}/katex.min.css", katex));
                script defer src=(format!("{}/katex.min.js", katex)) {}
                script defer src=(format!("{}/contrib/auto-render.min.js", katex)) {}
                script { (PreEscaped(KATEX_INIT)) }
                (styles)
            }
            body class=(view.mode.class_name()) {
                header.app-bar {
                    (sidebar(view))
                    a.app-bar-title href=(view.href(routes::HOME)) { (site.blog_title) }
                }
                main.container {
                    (body)
                }
                (footer(view))
            }
        }
    }
}
