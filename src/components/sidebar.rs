//! Sidebar drawer with profile, navigation and social links

use maud::{Markup, html};

use super::ViewContext;
use super::icons::{icon, sns_icon};
use crate::avatar;
use crate::routes;

const AVATAR_SIZE: u32 = 64;

/// Renders the sidebar drawer
///
/// A `details` element toggled from the app bar, so the drawer works
/// without scripts.
///
/// # Arguments
///
/// * `view`: Page context with the site settings
///
/// # Returns
///
/// Sidebar markup
pub fn sidebar(view: &ViewContext) -> Markup {
    let site = view.site;
    html! {
        details.sidebar {
            summary.sidebar-toggle aria-label="Open Sidebar" {
                (icon("ph-list"))
            }
            nav.sidebar-drawer {
                (profile(view))
                hr.divider;
                ul.nav-list {
                    (nav_item(view, "Home", &view.href(routes::HOME), "ph-house"))
                    (nav_item(view, "Articles", &view.href(&routes::articles(None, 1)), "ph-article"))
                    (nav_item(view, "Tags", &view.href(&routes::tags()), "ph-tag"))
                    (nav_item(view, "Edit page", &site.issues_page_url, "ph-pencil-simple"))
                }
                hr.divider;
                ul.nav-list.sns-list {
                    @for sns in &site.sns {
                        (nav_item(view, &sns.name, &sns.url, sns_icon(&sns.name)))
                    }
                }
            }
        }
    }
}

/// Author profile block: avatar, name and introduction.
pub fn profile(view: &ViewContext) -> Markup {
    let site = view.site;
    html! {
        div.profile {
            @if site.avatar_image_url.path.is_empty() {
                (avatar::render(&site.author_name, AVATAR_SIZE))
            } @else {
                img.avatar src=(view.asset(&site.avatar_image_url.path)) alt=(site.author_name)
                    width=(AVATAR_SIZE) height=(AVATAR_SIZE);
            }
            div.profile-name { (site.author_name) }
            @if !site.author_introduction.is_empty() {
                p.profile-introduction { (site.author_introduction) }
            }
        }
    }
}

/// Renders one navigation entry
///
/// Entries with empty text or href render nothing. Internal links open in
/// place; external ones open in a new tab.
///
/// # Arguments
///
/// * `view`: Page context
/// * `text`: Entry label
/// * `href`: Target URL
/// * `icon_class`: Phosphor icon class
///
/// # Returns
///
/// List item markup, or empty markup
pub fn nav_item(view: &ViewContext, text: &str, href: &str, icon_class: &str) -> Markup {
    if text.is_empty() || href.is_empty() {
        return html! {};
    }

    html! {
        li {
            @if view.links.is_internal(href) {
                a.nav-item href=(href) {
                    (icon(icon_class))
                    span { (text) }
                }
            } @else {
                a.nav-item href=(href) target="_blank" rel="noopener" {
                    (icon(icon_class))
                    span { (text) }
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
    use crate::site::{AssetPath, SnsLink};

    #[test]
    fn test_sidebar_entries() {
        // Arrange
        let site = site_config();
        let links = LinkResolver::new("", &site.domain);
        let view = ViewContext::new(&site, &links, DisplayMode::Light);

        // Act
        let html = sidebar(&view).into_string();

        // Assert
        assert!(html.contains(r#"href="/index.html""#), "{}", html);
        assert!(html.contains(r#"href="/articles/index.html""#));
        assert!(html.contains(r#"href="/articles/tags/index.html""#));
        assert!(html.contains("Edit page"));
        assert!(html.contains("ph-github-logo"));
        assert!(html.contains("<svg"), "Generated avatar without image");
    }

    #[test]
    fn test_external_links_open_new_tab() {
        // Arrange
        let site = site_config();
        let links = LinkResolver::new("", &site.domain);
        let view = ViewContext::new(&site, &links, DisplayMode::Light);

        // Act
        let external = nav_item(&view, "GitHub", "https://github.com/sam", "ph-hash").into_string();
        let internal = nav_item(&view, "Home", "/index.html", "ph-house").into_string();
        let own_domain =
            nav_item(&view, "About", "https://sam.example.com/about", "ph-hash").into_string();

        // Assert
        assert!(external.contains(r#"target="_blank" rel="noopener""#), "{}", external);
        assert!(!internal.contains("target="), "{}", internal);
        assert!(!own_domain.contains("target="), "{}", own_domain);
    }

    #[test]
    fn test_empty_entries_skipped() {
        // Arrange
        let mut site = site_config();
        site.issues_page_url = String::new();
        site.sns.push(SnsLink {
            name: String::new(),
            url: "https://example.org".to_string(),
        });
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, DisplayMode::Light);

        // Act
        let html = sidebar(&view).into_string();

        // Assert
        assert!(!html.contains("Edit page"), "{}", html);
        assert!(!html.contains("https://example.org"));
    }

    #[test]
    fn test_profile_image() {
        let mut site = site_config();
        site.avatar_image_url = AssetPath {
            path: "static/images/avatar.png".to_string(),
        };
        let links = LinkResolver::new("blog", "");
        let view = ViewContext::new(&site, &links, DisplayMode::Light);
        let html = profile(&view).into_string();
        assert!(html.contains(r#"src="/blog/static/images/avatar.png""#), "{}", html);
        assert!(!html.contains("<svg"));
    }
}
