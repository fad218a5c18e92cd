//! Rendered node view
//!
//! Turns a rendered tree into HTML. Every node kind has exactly one view;
//! empty nodes produce no markup.

use maud::{Markup, PreEscaped, html};

use super::ViewContext;
use super::post_card::post_card;
use crate::content::LinkMetadata;
use crate::markdown::{CellAlign, RenderedNode, RenderedTree};

/// Maximum height of a code block before it scrolls.
const CODE_BLOCK_MAX_HEIGHT: &str = "400px";

/// Renders a rendered tree inside a `.markdown` container
///
/// # Arguments
///
/// * `tree`: Output of the markdown renderer
/// * `view`: Page context (display mode selects the quote card background)
///
/// # Returns
///
/// Markup for the whole document
pub fn markdown_view(tree: &RenderedTree, view: &ViewContext) -> Markup {
    html! {
        div.markdown {
            (nodes(&tree.nodes, view))
        }
    }
}

fn nodes(list: &[RenderedNode], view: &ViewContext) -> Markup {
    html! {
        @for node in list {
            (node_view(node, view))
        }
    }
}

/// Renders one node and its children.
pub fn node_view(node: &RenderedNode, view: &ViewContext) -> Markup {
    match node {
        RenderedNode::Empty => html! {},
        RenderedNode::Heading {
            level,
            anchor,
            text,
            prefix,
        } => heading(*level, anchor, text, prefix),
        RenderedNode::Paragraph { children } => html! { p { (nodes(children, view)) } },
        RenderedNode::EmbedLink { url, metadata } => embed_link(url, metadata.as_ref()),
        RenderedNode::PostCard { post } => html! {
            div.embedded-post { (post_card(post, view)) }
        },
        RenderedNode::Blockquote { children } => html! {
            blockquote.quote-card style=(format!("background-color: {}", view.mode.quote_background())) {
                (nodes(children, view))
            }
        },
        RenderedNode::Table { children } => html! {
            div.table-scroll { table { (nodes(children, view)) } }
        },
        RenderedNode::TableHead { children } => html! { thead { (nodes(children, view)) } },
        RenderedNode::TableBody { children } => html! { tbody { (nodes(children, view)) } },
        RenderedNode::TableRow { children } => html! { tr { (nodes(children, view)) } },
        RenderedNode::TableHeaderCell { align, children } => html! {
            th style=[align_style(*align)] { (nodes(children, view)) }
        },
        RenderedNode::TableCell { align, children } => html! {
            td style=[align_style(*align)] { (nodes(children, view)) }
        },
        RenderedNode::Image { href, src, alt } => image_card(href, src, alt),
        RenderedNode::CodeInline { code } => html! { code.code-inline { (code) } },
        RenderedNode::CodeBlock {
            language,
            highlighted,
            ..
        } => html! {
            div.code-scroll style=(format!("overflow-y: auto; max-height: {}", CODE_BLOCK_MAX_HEIGHT)) {
                pre.code-block {
                    code class=[language.as_ref().map(|lang| format!("language-{}", lang))] {
                        (PreEscaped(highlighted))
                    }
                }
            }
        },
        RenderedNode::Link { href, title } => html! { a href=(href) { (title) } },
        RenderedNode::Text { text } => html! { (text) },
        RenderedNode::Emphasis { children } => html! { em { (nodes(children, view)) } },
        RenderedNode::Strong { children } => html! { strong { (nodes(children, view)) } },
        RenderedNode::Strikethrough { children } => html! { del { (nodes(children, view)) } },
        RenderedNode::Math { display, tex } => math(*display, tex),
        RenderedNode::List {
            ordered,
            start,
            children,
        } => {
            if *ordered {
                html! {
                    ol start=[(*start != 1).then_some(*start)] { (nodes(children, view)) }
                }
            } else {
                html! { ul { (nodes(children, view)) } }
            }
        }
        RenderedNode::ListItem { children } => html! { li { (nodes(children, view)) } },
        RenderedNode::FootnoteItem {
            index,
            references,
            children,
            ..
        } => html! {
            li.footnote-item id=(format!("fn-{}", index)) {
                (nodes(children, view))
                @for occurrence in 1..=(*references).max(1) {
                    " "
                    a.footnote-backref href=(format!("#{}", footnote_ref_id(*index, occurrence))) aria-label="Back to content" {
                        "↩"
                        @if occurrence > 1 { sup { (occurrence) } }
                    }
                }
            }
        },
        RenderedNode::FootnoteRef {
            index, occurrence, ..
        } => html! {
            sup.footnote-ref {
                a id=(footnote_ref_id(*index, *occurrence)) href=(format!("#fn-{}", index)) { (index) }
            }
        },
        RenderedNode::LineBreak => html! { br; },
        RenderedNode::ThematicBreak => html! { hr; },
        RenderedNode::Html { html: raw } => html! { (PreEscaped(raw)) },
    }
}

/// Anchor id of a footnote reference; repeats get an occurrence suffix.
fn footnote_ref_id(index: usize, occurrence: usize) -> String {
    if occurrence <= 1 {
        format!("fnref-{}", index)
    } else {
        format!("fnref-{}-{}", index, occurrence)
    }
}

fn align_style(align: CellAlign) -> Option<&'static str> {
    match align {
        CellAlign::Right => Some("text-align: right"),
        CellAlign::Default => None,
    }
}

fn heading(level: u8, anchor: &str, text: &str, prefix: &str) -> Markup {
    let inner = html! {
        a.heading-permalink href=(format!("#{}", anchor)) { (prefix) }
        " "
        (text)
    };

    match level {
        1 => html! { h1 id=(anchor) { (inner) } },
        2 => html! { h2 id=(anchor) { (inner) } },
        3 => html! { h3 id=(anchor) { (inner) } },
        4 => html! { h4 id=(anchor) { (inner) } },
        5 => html! { h5 id=(anchor) { (inner) } },
        _ => html! { h6 id=(anchor) { (inner) } },
    }
}

/// Card for a bare URL, enriched with fetched page metadata when available.
fn embed_link(url: &str, metadata: Option<&LinkMetadata>) -> Markup {
    let title = metadata
        .map(|m| m.title.as_str())
        .filter(|title| !title.is_empty())
        .unwrap_or(url);

    html! {
        a.embed-link href=(url) target="_blank" rel="noopener" {
            div.embed-body {
                div.embed-title { (title) }
                @if let Some(description) = metadata.map(|m| m.description.as_str()).filter(|d| !d.is_empty()) {
                    div.embed-description { (description) }
                }
                div.embed-url { i.ph.ph-link {} " " (url) }
            }
            @if let Some(image) = metadata.and_then(|m| m.image.as_deref()) {
                img.embed-image src=(image) alt="" loading="lazy";
            }
        }
    }
}

fn image_card(href: &str, src: &str, alt: &str) -> Markup {
    html! {
        a.image-card href=(href) target="_blank" rel="noopener" aria-label=(alt) {
            span.image-frame {
                img src=(src) alt=(alt) loading="lazy";
                span.image-caption { (alt) }
            }
        }
    }
}

/// Math source wrapped in the delimiters the client side renderer scans for.
fn math(display: bool, tex: &str) -> Markup {
    if display {
        html! { span.math.math-display { "\\[" (tex) "\\]" } }
    } else {
        html! { span.math.math-inline { "\\(" (tex) "\\)" } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fixtures::site_config;
    use crate::config::DisplayMode;
    use crate::content::{PostIndex, PostSummary, Tag};
    use crate::markdown::{LinkResolver, MarkdownRenderer, RenderContext};

    fn render_with(markdown: &str, posts: &PostIndex, mode: DisplayMode) -> String {
        let site = site_config();
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, mode);
        let context = RenderContext::new(posts);
        let tree = MarkdownRenderer::new().render(markdown, &context);
        markdown_view(&tree, &view).into_string()
    }

    fn render(markdown: &str) -> String {
        render_with(markdown, &PostIndex::new(), DisplayMode::Light)
    }

    #[test]
    fn test_heading_with_permalink() {
        // Arrange & Act
        let html = render("## Getting Started");

        // Assert
        assert!(
            html.contains(r##"<h2 id="Getting Started"><a class="heading-permalink" href="#Getting Started">##</a> Getting Started</h2>"##),
            "{}",
            html
        );
    }

    #[test]
    fn test_quote_card_background_by_mode() {
        // Arrange & Act
        let light = render_with("> quote", &PostIndex::new(), DisplayMode::Light);
        let dark = render_with("> quote", &PostIndex::new(), DisplayMode::Dark);

        // Assert
        assert!(light.contains("background-color: #efefefef"), "{}", light);
        assert!(dark.contains("background-color: #303030"), "{}", dark);
    }

    #[test]
    fn test_table_header_cells_right_aligned() {
        // Arrange
        let markdown = "| A | B |\n|:--|:-:|\n| 1 | 2 |\n";

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains(r#"<th style="text-align: right">A</th>"#), "{}", html);
        assert!(html.contains("<td>1</td>"), "Body cells carry no alignment: {}", html);
    }

    #[test]
    fn test_code_block_container() {
        // Arrange & Act
        let html = render("```rust\nfn main() {}\n```\n");

        // Assert
        assert!(html.contains("max-height: 400px"), "{}", html);
        assert!(html.contains("overflow-y: auto"));
        assert!(html.contains(r#"<code class="language-rust">"#));
        assert!(html.contains("hljs-"));
    }

    #[test]
    fn test_code_block_without_language() {
        let html = render("```\n<b>raw</b>\n```\n");
        assert!(html.contains("<code>&lt;b&gt;raw&lt;/b&gt;"), "{}", html);
    }

    #[test]
    fn test_image_card() {
        // Arrange
        let markdown = r#"<img src="a.png" alt="A caption" origin_url="https://cdn/a-full.png">"#;

        // Act
        let html = render(markdown);

        // Assert
        assert!(html.contains(r#"href="https://cdn/a-full.png""#), "{}", html);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"aria-label="A caption""#));
        assert!(html.contains(r#"<img src="a.png" alt="A caption""#));
        assert!(html.contains(r#"<span class="image-caption">A caption</span>"#));
    }

    #[test]
    fn test_image_without_alt_is_line_break() {
        let html = render("<img src=\"a.png\">");
        assert_eq!(html, r#"<div class="markdown"><br></div>"#);
    }

    #[test]
    fn test_embed_link_card() {
        let html = render("https://example.com/x");
        assert!(html.contains(r#"<a class="embed-link" href="https://example.com/x""#), "{}", html);
        assert!(!html.contains("<p>"), "Embed link replaces the paragraph");
    }

    #[test]
    fn test_post_card_embed() {
        // Arrange
        let posts: PostIndex = [PostSummary::new(
            "42",
            "The Answer",
            "2022-04-02",
            vec![Tag::new("rust", "dea584", "")],
        )]
        .into_iter()
        .collect();

        // Act
        let html = render_with("#42\n\n#43\n", &posts, DisplayMode::Light);

        // Assert
        assert!(html.contains("The Answer"), "{}", html);
        assert!(html.contains(r#"href="/articles/42.html""#));
        assert_eq!(html.matches("embedded-post").count(), 1, "Unresolved id renders nothing");
    }

    #[test]
    fn test_math_delimiters() {
        let html = render("Euler $e^{i\\pi}$");
        assert!(html.contains(r#"<span class="math math-inline">\(e^{i\pi}\)</span>"#), "{}", html);
    }

    #[test]
    fn test_footnotes_section() {
        // Arrange & Act
        let html = render("Claim[^1].\n\n[^1]: Source.\n");

        // Assert
        assert!(html.contains(r##"<a id="fnref-1" href="#fn-1">1</a>"##), "{}", html);
        assert!(html.contains(r#"<h2 id="脚注">"#), "{}", html);
        assert!(html.contains(r#"<li class="footnote-item" id="fn-1">"#));
    }

    #[test]
    fn test_repeated_footnote_references_have_unique_ids() {
        // Arrange & Act
        let html = render("Note[^1] and again[^1].\n\n[^1]: Source.\n");

        // Assert
        assert_eq!(html.matches(r#"id="fnref-1""#).count(), 1, "{}", html);
        assert!(html.contains(r##"<a id="fnref-1-2" href="#fn-1">1</a>"##), "{}", html);
        assert!(html.contains(r##"href="#fnref-1""##), "Back reference to first use");
        assert!(html.contains(r##"href="#fnref-1-2""##), "Back reference to second use");
    }

    #[test]
    fn test_ordered_list_start() {
        let html = render("3. three\n4. four\n");
        assert!(html.contains(r#"<ol start="3">"#), "{}", html);
        let html = render("1. one\n");
        assert!(html.contains("<ol>"), "{}", html);
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render("a < b & c");
        assert!(html.contains("a &lt; b &amp; c"), "{}", html);
    }
}
