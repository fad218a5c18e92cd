//! Article list navigation: pagination and year selector

use maud::{Markup, html};

use super::ViewContext;
use super::icons::icon;
use crate::routes;

/// Value of the year selector option that lists every year.
pub const ALL_YEARS: &str = "all";

/// Renders pagination links for an article listing
///
/// Shows previous/next arrows and one link per page, with the current page
/// marked. A listing with a single page (or none) renders nothing.
///
/// # Arguments
///
/// * `view`: Page context
/// * `year`: Year of the listing, None for all articles
/// * `current`: Current 1-based page
/// * `total`: Number of pages
///
/// # Returns
///
/// Pagination markup
pub fn pagination(view: &ViewContext, year: Option<i32>, current: usize, total: usize) -> Markup {
    if total <= 1 {
        return html! {};
    }

    html! {
        nav.pagination aria-label="Pagination" {
            @if current > 1 {
                a.page-link.page-prev href=(view.href(&routes::articles(year, current - 1))) aria-label="Previous page" {
                    (icon("ph-caret-left"))
                }
            }
            @for page in 1..=total {
                @if page == current {
                    span.page-link.page-current aria-current="page" { (page) }
                } @else {
                    a.page-link href=(view.href(&routes::articles(year, page))) { (page) }
                }
            }
            @if current < total {
                a.page-link.page-next href=(view.href(&routes::articles(year, current + 1))) aria-label="Next page" {
                    (icon("ph-caret-right"))
                }
            }
        }
    }
}

/// Renders the year selector
///
/// Offers `all` followed by the given years. Choosing an option navigates to
/// the first listing page of that year.
///
/// # Arguments
///
/// * `view`: Page context
/// * `years`: Years with posts, newest first
/// * `selected`: Year of the current listing, None for all
///
/// # Returns
///
/// Select element markup
pub fn year_selector(view: &ViewContext, years: &[i32], selected: Option<i32>) -> Markup {
    html! {
        div.year-selector {
            label for="year-select" { (icon("ph-calendar-blank")) " Year" }
            select id="year-select" onchange="location.href = this.value" {
                option value=(view.href(&routes::articles(None, 1))) selected[selected.is_none()] {
                    (ALL_YEARS)
                }
                @for year in years {
                    option value=(view.href(&routes::articles(Some(*year), 1))) selected[selected == Some(*year)] {
                        (year)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fixtures::site_config;
    use crate::config::DisplayMode;
    use crate::markdown::LinkResolver;

    #[test]
    fn test_single_page_has_no_pagination() {
        let site = site_config();
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, DisplayMode::Light);
        assert_eq!(pagination(&view, None, 1, 1).into_string(), "");
        assert_eq!(pagination(&view, None, 1, 0).into_string(), "");
    }

    #[test]
    fn test_pagination_links() {
        // Arrange
        let site = site_config();
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, DisplayMode::Light);

        // Act
        let html = pagination(&view, Some(2023), 2, 3).into_string();

        // Assert
        assert!(html.contains(r#"href="/articles/2023/index.html""#), "{}", html);
        assert!(html.contains(r#"href="/articles/2023/page-3.html""#), "{}", html);
        assert!(html.contains(r#"aria-current="page">2</span>"#), "{}", html);
        assert!(html.contains("page-prev"));
        assert!(html.contains("page-next"));
    }

    #[test]
    fn test_first_page_has_no_previous_link() {
        let site = site_config();
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, DisplayMode::Light);
        let html = pagination(&view, None, 1, 2).into_string();
        assert!(!html.contains("page-prev"), "{}", html);
        assert!(html.contains("page-next"));
    }

    #[test]
    fn test_year_selector_options() {
        // Arrange
        let site = site_config();
        let links = LinkResolver::new("blog", "");
        let view = ViewContext::new(&site, &links, DisplayMode::Light);

        // Act
        let html = year_selector(&view, &[2024, 2023], Some(2023)).into_string();

        // Assert
        assert!(html.contains(r#"<option value="/blog/articles/index.html">all</option>"#), "{}", html);
        assert!(html.contains(r#"<option value="/blog/articles/2023/index.html" selected>2023</option>"#), "{}", html);
        let first = html.find(">2024<").expect("2024 option");
        let second = html.find(">2023<").expect("2023 option");
        assert!(first < second, "Years keep the given order");
    }
}
