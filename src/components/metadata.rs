//! Article header components

use maud::{Markup, html};

use super::ViewContext;
use super::icons::icon;
use super::tag_button::tag_buttons;
use crate::content::Article;
use crate::util::format_date;

/// Renders the article header
///
/// Title, posted date, updated date when it differs from the posted one,
/// and the tag buttons.
///
/// # Arguments
///
/// * `article`: Article being rendered
/// * `view`: Page context
///
/// # Returns
///
/// Article header markup
pub fn article_header(article: &Article, view: &ViewContext) -> Markup {
    let updated = article
        .updated_at
        .as_deref()
        .filter(|updated| !updated.is_empty() && format_date(updated) != format_date(&article.posted_at));

    html! {
        header.article-header {
            h1.article-title { (article.title) }
            div.article-dates {
                @if !article.posted_at.is_empty() {
                    span.article-date {
                        (icon("ph-calendar-blank"))
                        " "
                        time datetime=(article.posted_at) { (format_date(&article.posted_at)) }
                    }
                }
                @if let Some(updated) = updated {
                    span.article-date.article-updated {
                        (icon("ph-clock-counter-clockwise"))
                        " "
                        time datetime=(updated) { (format_date(updated)) }
                    }
                }
            }
            (tag_buttons(&article.tags, view))
        }
    }
}

/// Renders a section heading with an icon, as used above card lists.
pub fn section_heading(icon_class: &str, title: &str) -> Markup {
    html! {
        h2.section-heading {
            (icon(icon_class))
            " "
            (title)
        }
    }
}
