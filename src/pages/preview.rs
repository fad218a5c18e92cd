//! Standalone preview of a single document
//!
//! Renders one markdown document (or index data) with the site's settings
//! into a self-contained page with inlined CSS, so it can be opened straight
//! from disk.

use clap::ValueEnum;
use maud::Markup;

use super::{article, index};
use crate::assets::inline_css;
use crate::components::ViewContext;
use crate::components::layout::standalone_page;
use crate::content::{Article, PostIndex};
use crate::markdown::{MarkdownRenderer, RenderContext, RenderedTree};
use crate::site::{IndexData, SiteData};

/// How a previewed document is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PageType {
    /// Markdown body of an article
    #[default]
    Article,
    /// YAML with the fields of `fixed/index.json`
    Index,
}

/// Result of a preview render.
#[derive(Debug, Clone)]
pub struct Preview {
    /// Rendered tree of the previewed markdown.
    pub tree: RenderedTree,
    /// Complete standalone page.
    pub page: Markup,
}

/// Parses index page data from YAML
///
/// A document that is not valid index data previews as an empty
/// description.
pub fn parse_index_yaml(source: &str) -> IndexData {
    match serde_yaml::from_str::<IndexData>(source) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("Index preview is not valid YAML: {}", e);
            IndexData {
                site_description: String::new(),
                ..IndexData::default()
            }
        }
    }
}

/// Renders a preview page
///
/// Every article of the site is available as a post card target.
///
/// # Arguments
///
/// * `source`: Previewed document
/// * `page_type`: How to interpret the document
/// * `site`: Site settings and data files
/// * `articles`: Site articles for post card lookups
/// * `view`: Page context
///
/// # Returns
///
/// Rendered tree and standalone page
pub fn generate(
    source: &str,
    page_type: PageType,
    site: &SiteData,
    articles: &[Article],
    view: &ViewContext,
) -> Preview {
    let renderer = MarkdownRenderer::new();
    let posts: PostIndex = articles.iter().map(Article::summary).collect();
    let context = RenderContext::new(&posts)
        .with_metadata(&site.metadata)
        .with_links(view.links.clone());
    let css = inline_css();

    match page_type {
        PageType::Article => {
            let article = Article::preview(source);
            let tree = renderer.render(&article.content, &context);
            let page = standalone_page(
                &article::meta(&article, view),
                view,
                &css,
                article::body(&article, &tree, &[], view),
            );
            Preview { tree, page }
        }
        PageType::Index => {
            let data = parse_index_yaml(source);
            let tree = renderer.render(&data.site_description, &context);
            let skills: Vec<_> = site
                .profile
                .skills
                .iter()
                .map(|skill| (skill, renderer.render(&skill.description, &context)))
                .collect();
            let skill_tags = site.profile.skill_tags();
            let summaries: Vec<_> = articles.iter().map(Article::summary).collect();
            let page_data = index::IndexPageData {
                index: &data,
                description: &tree,
                skills: &skills,
                skill_tags: &skill_tags,
                posts: &summaries,
            };
            let page = standalone_page(
                &index::meta(&page_data, view),
                view,
                &css,
                index::body(&page_data, view),
            );
            Preview { tree, page }
        }
    }
}
