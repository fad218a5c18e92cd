//! Article page generation

use maud::{Markup, html};

use super::site_page;
use crate::components::ViewContext;
use crate::components::layout::{PageMeta, SocialCard};
use crate::components::markdown_view::markdown_view;
use crate::components::metadata::{article_header, section_heading};
use crate::components::post_card::post_cards;
use crate::content::{Article, PostSummary};
use crate::markdown::RenderedTree;
use crate::routes;

/// Head metadata of an article page
///
/// An empty description falls back to the author's default one. The social
/// card points at the article thumbnail.
///
/// # Arguments
///
/// * `article`: Article being rendered
/// * `view`: Page context
///
/// # Returns
///
/// Page metadata with a social card
pub fn meta(article: &Article, view: &ViewContext) -> PageMeta {
    let site = view.site;
    let description = if article.description.trim().is_empty() {
        site.default_description()
    } else {
        article.description.clone()
    };

    let social = SocialCard {
        title: format!("{} | {}", article.title, site.blog_title),
        description: description.clone(),
        image: absolute_url(view, &routes::thumbnail(&article.slug)),
        url: absolute_url(view, &routes::article(&article.slug)),
    };
    PageMeta::new(article.title.clone(), description).with_social(social)
}

/// Article body: header, rendered markdown and related posts.
pub fn body(
    article: &Article,
    content: &RenderedTree,
    related: &[PostSummary],
    view: &ViewContext,
) -> Markup {
    html! {
        article.article {
            (article_header(article, view))
            (markdown_view(content, view))
        }
        @if !related.is_empty() {
            section.related-articles {
                (section_heading("ph-link-simple", "Related articles"))
                (post_cards(related, view))
            }
        }
    }
}

/// Generates an article page
///
/// # Arguments
///
/// * `article`: Article with its front matter
/// * `content`: Rendered article markdown
/// * `related`: Summaries of related articles, shown under the article
/// * `view`: Page context
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(
    article: &Article,
    content: &RenderedTree,
    related: &[PostSummary],
    view: &ViewContext,
) -> Markup {
    site_page(&meta(article, view), view, body(article, content, related, view))
}

/// Full URL of a route when the site domain is known, site relative otherwise.
fn absolute_url(view: &ViewContext, route: &str) -> String {
    let href = view.href(route);
    let domain = view.site.domain.trim_end_matches('/');
    if domain.is_empty() {
        href
    } else if domain.contains("://") {
        format!("{}{}", domain, href)
    } else {
        format!("https://{}{}", domain, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fixtures::site_config;
    use crate::config::DisplayMode;
    use crate::content::{PostIndex, Tag};
    use crate::markdown::{LinkResolver, MarkdownRenderer, RenderContext};

    fn article(description: &str) -> Article {
        Article {
            slug: "12".to_string(),
            title: "Borrowing".to_string(),
            posted_at: "2023-02-01".to_string(),
            updated_at: None,
            tags: vec![Tag::new("rust", "dea584", "")],
            description: description.to_string(),
            content: "## Intro\n\nHello".to_string(),
        }
    }

    #[test]
    fn test_meta_default_description() {
        // Arrange
        let site = site_config();
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, DisplayMode::Light);

        // Act
        let meta = meta(&article("  "), &view);

        // Assert
        assert_eq!(meta.title, "Borrowing");
        assert_eq!(meta.description, "Samの記事です。");
        let social = meta.social.expect("Articles carry a social card");
        assert_eq!(social.title, "Borrowing | Test Blog");
        assert_eq!(
            social.image,
            "https://sam.example.com/static/images/thumbnail/12.jpg"
        );
        assert_eq!(social.url, "https://sam.example.com/articles/12.html");
    }

    #[test]
    fn test_meta_keeps_description() {
        let site = site_config();
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, DisplayMode::Light);
        assert_eq!(meta(&article("About borrowing"), &view).description, "About borrowing");
    }

    #[test]
    fn test_relative_social_urls_without_domain() {
        let mut site = site_config();
        site.domain = String::new();
        let links = LinkResolver::new("blog", "");
        let view = ViewContext::new(&site, &links, DisplayMode::Light);
        let social = meta(&article(""), &view).social.expect("social card");
        assert_eq!(social.image, "/blog/static/images/thumbnail/12.jpg");
    }

    #[test]
    fn test_generate_article_page() {
        // Arrange
        let site = site_config();
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, DisplayMode::Light);
        let article = article("");
        let posts = PostIndex::new();
        let context = RenderContext::new(&posts);
        let content = MarkdownRenderer::new().render(&article.content, &context);
        let related = vec![PostSummary::new("3", "Ownership", "2022-12-01", vec![])];

        // Act
        let html = generate(&article, &content, &related, &view).into_string();

        // Assert
        assert!(html.contains("<title>Borrowing | Test Blog</title>"), "{}", html);
        assert!(html.contains("Intro"));
        assert!(html.contains("Related articles"));
        assert!(html.contains(r#"href="/articles/3.html""#));
    }

    #[test]
    fn test_no_related_section_when_empty() {
        let site = site_config();
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, DisplayMode::Light);
        let article = article("");
        let html = body(&article, &RenderedTree::default(), &[], &view).into_string();
        assert!(!html.contains("Related articles"), "{}", html);
    }
}
