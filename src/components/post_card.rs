//! Article summary cards

use maud::{Markup, html};

use super::ViewContext;
use super::tag_button::tag_buttons;
use crate::content::PostSummary;
use crate::routes;
use crate::util::format_date;

/// Renders a post summary card linking to the article
///
/// # Arguments
///
/// * `post`: Summary of the linked article
/// * `view`: Page context
///
/// # Returns
///
/// Card markup with title, date and tag buttons
pub fn post_card(post: &PostSummary, view: &ViewContext) -> Markup {
    html! {
        article.post-card {
            a.post-card-link href=(view.href(&routes::article(&post.slug))) {
                h3.post-card-title { (post.title) }
            }
            @if !post.posted_at.is_empty() {
                div.post-card-date {
                    i.ph.ph-calendar-blank {}
                    " "
                    time datetime=(post.posted_at) { (format_date(&post.posted_at)) }
                }
            }
            (tag_buttons(&post.tags, view))
        }
    }
}

/// Renders a list of post cards.
pub fn post_cards(posts: &[PostSummary], view: &ViewContext) -> Markup {
    html! {
        div.post-cards {
            @for post in posts {
                (post_card(post, view))
            }
        }
    }
}
