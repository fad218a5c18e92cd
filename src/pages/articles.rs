//! Article list page generation

use maud::{Markup, html};

use super::site_page;
use crate::components::ViewContext;
use crate::components::icons::icon;
use crate::components::layout::PageMeta;
use crate::components::nav::{pagination, year_selector};
use crate::components::post_card::post_cards;
use crate::content::PostSummary;
use crate::util::{POSTS_PER_PAGE, page_count, page_slice};

/// One page of an article listing.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    /// Posts of the whole listing, newest first.
    pub posts: &'a [PostSummary],
    /// Years offered by the selector, newest first.
    pub years: &'a [i32],
    /// Year filter, None for all articles.
    pub year: Option<i32>,
    /// 1-based page number.
    pub page: usize,
}

impl Listing<'_> {
    /// Number of pages of the listing.
    pub fn total_pages(&self) -> usize {
        page_count(self.posts.len(), POSTS_PER_PAGE)
    }

    /// Posts shown on this page.
    pub fn page_posts(&self) -> &[PostSummary] {
        page_slice(self.posts, self.page, POSTS_PER_PAGE)
    }

    fn title(&self) -> String {
        let base = match self.year {
            Some(year) => format!("Articles {}", year),
            None => "Articles".to_string(),
        };
        if self.page > 1 {
            format!("{} (page {})", base, self.page)
        } else {
            base
        }
    }
}

/// Generates one article listing page
///
/// Year selector on top, then the post cards with pagination above and
/// below them.
///
/// # Arguments
///
/// * `listing`: Posts, year filter and page to render
/// * `view`: Page context
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(listing: &Listing, view: &ViewContext) -> Markup {
    let meta = PageMeta::new(listing.title(), view.site.default_description());
    let total = listing.total_pages();

    site_page(
        &meta,
        view,
        html! {
            h1.page-title {
                (icon("ph-article"))
                " "
                (listing.title())
            }
            (year_selector(view, listing.years, listing.year))
            @if listing.posts.is_empty() {
                p.empty-state { "No articles yet." }
            } @else {
                (pagination(view, listing.year, listing.page, total))
                (post_cards(listing.page_posts(), view))
                (pagination(view, listing.year, listing.page, total))
            }
        },
    )
}
