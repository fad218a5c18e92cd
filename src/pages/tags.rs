//! Tag listing and detail page generation

use maud::{Markup, html};

use super::site_page;
use crate::components::ViewContext;
use crate::components::icons::icon;
use crate::components::layout::PageMeta;
use crate::components::post_card::post_cards;
use crate::components::tag_button::tag_button;
use crate::content::{PostSummary, Tag};

/// Generates the tags listing page
///
/// Displays every tag used by a published article with its post count,
/// most used first.
///
/// # Arguments
///
/// * `tags`: Tags with post counts, already sorted
/// * `view`: Page context
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate_list(tags: &[(Tag, usize)], view: &ViewContext) -> Markup {
    let meta = PageMeta::new("Tags", view.site.default_description());

    site_page(
        &meta,
        view,
        html! {
            h1.page-title {
                (icon("ph-tag"))
                " Tags"
            }
            @if tags.is_empty() {
                p.empty-state { "No tags yet." }
            } @else {
                ul.tag-list {
                    @for (tag, count) in tags {
                        li {
                            (tag_button(tag, view))
                            span.tag-count { (count) }
                        }
                    }
                }
            }
        },
    )
}

/// Generates a tag detail page
///
/// Shows the tag description, if any, and every post carrying the tag.
///
/// # Arguments
///
/// * `tag`: Tag being shown
/// * `posts`: Posts with this tag, newest first
/// * `view`: Page context
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate_detail(tag: &Tag, posts: &[PostSummary], view: &ViewContext) -> Markup {
    let description = if tag.description.is_empty() {
        format!("Articles tagged {}", tag.name)
    } else {
        tag.description.clone()
    };
    let meta = PageMeta::new(tag.name.clone(), description);

    site_page(
        &meta,
        view,
        html! {
            h1.page-title {
                (icon("ph-tag"))
                " "
                (tag.name)
            }
            @if !tag.description.is_empty() {
                p.tag-description { (tag.description) }
            }
            (post_cards(posts, view))
        },
    )
}

/// Posts carrying the named tag, in the given order.
pub fn posts_with_tag(posts: &[PostSummary], name: &str) -> Vec<PostSummary> {
    posts
        .iter()
        .filter(|post| post.tags.iter().any(|tag| tag.name == name))
        .cloned()
        .collect()
}
