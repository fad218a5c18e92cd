//! Site index page generation

use maud::{Markup, html};

use super::site_page;
use crate::components::ViewContext;
use crate::components::layout::PageMeta;
use crate::components::markdown_view::markdown_view;
use crate::components::metadata::section_heading;
use crate::components::post_card::post_cards;
use crate::components::skill_card::skill_section;
use crate::content::PostSummary;
use crate::markdown::RenderedTree;
use crate::routes;
use crate::site::{IndexData, Skill};

/// Number of articles shown in the "Latest articles" section.
pub const LATEST_POSTS: usize = 6;

/// Data container for index page generation
pub struct IndexPageData<'a> {
    pub index: &'a IndexData,
    /// Rendered `site_description` markdown.
    pub description: &'a RenderedTree,
    /// Skills with their rendered descriptions.
    pub skills: &'a [(&'a Skill, RenderedTree)],
    pub skill_tags: &'a [&'a str],
    /// Published posts, newest first.
    pub posts: &'a [PostSummary],
}

/// Head metadata of the index page.
pub fn meta(data: &IndexPageData<'_>, view: &ViewContext) -> PageMeta {
    let description = if view.site.site_introduction.is_empty() {
        view.site.default_description()
    } else {
        view.site.site_introduction.clone()
    };
    PageMeta::new(data.index.site_header_title.clone(), description)
}

/// Index body: header title, site description, skills and latest articles.
pub fn body(data: &IndexPageData<'_>, view: &ViewContext) -> Markup {
    let latest = &data.posts[..data.posts.len().min(LATEST_POSTS)];

    html! {
        h1.site-header-title { (data.index.site_header_title) }
        section.site-description {
            (markdown_view(data.description, view))
        }
        @if !data.skills.is_empty() {
            (section_heading("ph-lightbulb", "Skills"))
            (skill_section(data.skills, data.skill_tags, view))
        }
        @if !latest.is_empty() {
            section.latest-articles {
                (section_heading("ph-article", "Latest articles"))
                (post_cards(latest, view))
                a.more-link href=(view.href(&routes::articles(None, 1))) { "All articles" }
            }
        }
    }
}

/// Generates the site index page
///
/// # Arguments
///
/// * `data`: Index page data container with all required fields
/// * `view`: Page context
///
/// # Returns
///
/// Complete HTML markup for index page
pub fn generate(data: &IndexPageData<'_>, view: &ViewContext) -> Markup {
    site_page(&meta(data, view), view, body(data, view))
}
