//! Node rewriting: syntax nodes to presentation-ready rendered nodes.

use serde::Serialize;

use super::LinkResolver;
use super::syntax::{ImageAttrs, SyntaxNode, text_of};
use crate::content::{ExternalMetadata, LinkMetadata, PostIndex, PostSummary, shortcode_id};
use crate::highlight::Highlighter;

/// Label that replaces the generated `Footnotes` heading.
pub const FOOTNOTES_LABEL: &str = "脚注";

/// Horizontal alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellAlign {
    Default,
    Right,
}

/// Presentation-ready node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RenderedNode {
    /// Renders nothing.
    Empty,
    Heading {
        level: u8,
        anchor: String,
        text: String,
        prefix: String,
    },
    Paragraph {
        children: Vec<RenderedNode>,
    },
    /// A bare URL on its own line.
    EmbedLink {
        url: String,
        metadata: Option<LinkMetadata>,
    },
    /// A `#<id>` shortcode resolved to a post.
    PostCard {
        post: PostSummary,
    },
    Blockquote {
        children: Vec<RenderedNode>,
    },
    Table {
        children: Vec<RenderedNode>,
    },
    TableHead {
        children: Vec<RenderedNode>,
    },
    TableBody {
        children: Vec<RenderedNode>,
    },
    TableRow {
        children: Vec<RenderedNode>,
    },
    TableHeaderCell {
        align: CellAlign,
        children: Vec<RenderedNode>,
    },
    TableCell {
        align: CellAlign,
        children: Vec<RenderedNode>,
    },
    /// Image card; `href` is the original opened on click, `src` the thumbnail.
    Image {
        href: String,
        src: String,
        alt: String,
    },
    CodeInline {
        code: String,
    },
    CodeBlock {
        language: Option<String>,
        code: String,
        highlighted: String,
    },
    Link {
        href: String,
        title: String,
    },
    Text {
        text: String,
    },
    Emphasis {
        children: Vec<RenderedNode>,
    },
    Strong {
        children: Vec<RenderedNode>,
    },
    Strikethrough {
        children: Vec<RenderedNode>,
    },
    Math {
        display: bool,
        tex: String,
    },
    List {
        ordered: bool,
        start: usize,
        children: Vec<RenderedNode>,
    },
    ListItem {
        children: Vec<RenderedNode>,
    },
    FootnoteItem {
        label: String,
        index: usize,
        references: usize,
        children: Vec<RenderedNode>,
    },
    FootnoteRef {
        label: String,
        index: usize,
        occurrence: usize,
    },
    LineBreak,
    ThematicBreak,
    Html {
        html: String,
    },
}

/// Output of one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedTree {
    pub nodes: Vec<RenderedNode>,
}

impl RenderedTree {
    pub fn iter(&self) -> std::slice::Iter<'_, RenderedNode> {
        self.nodes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Read-only data a render may consult.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub posts: &'a PostIndex,
    pub metadata: Option<&'a ExternalMetadata>,
    pub links: LinkResolver,
}

impl<'a> RenderContext<'a> {
    pub fn new(posts: &'a PostIndex) -> Self {
        Self {
            posts,
            metadata: None,
            links: LinkResolver::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: &'a ExternalMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_links(mut self, links: LinkResolver) -> Self {
        self.links = links;
        self
    }
}

/// Permalink prefix of a heading: one `#` per level.
pub fn heading_prefix(level: u8) -> String {
    "#".repeat(usize::from(level))
}

/// Applies the rewrite rules to a syntax tree.
///
/// Each rule yields `Option<RenderedNode>`; a missing result becomes an
/// empty node (a line break for images) so one bad node never affects its
/// siblings.
pub struct Mapper<'m> {
    context: &'m RenderContext<'m>,
    highlighter: &'m Highlighter,
}

impl<'m> Mapper<'m> {
    pub fn new(context: &'m RenderContext<'m>, highlighter: &'m Highlighter) -> Self {
        Self {
            context,
            highlighter,
        }
    }

    pub fn map_tree(&self, nodes: &[SyntaxNode]) -> RenderedTree {
        RenderedTree {
            nodes: self.map_all(nodes),
        }
    }

    fn map_all(&self, nodes: &[SyntaxNode]) -> Vec<RenderedNode> {
        nodes.iter().map(|node| self.map_node(node)).collect()
    }

    pub fn map_node(&self, node: &SyntaxNode) -> RenderedNode {
        match node {
            SyntaxNode::Heading { level, children } => {
                heading(*level, children).unwrap_or(RenderedNode::Empty)
            }
            SyntaxNode::Paragraph(children) => self.paragraph(children),
            SyntaxNode::Text(text) => RenderedNode::Text { text: text.clone() },
            SyntaxNode::Emphasis(children) => RenderedNode::Emphasis {
                children: self.map_all(children),
            },
            SyntaxNode::Strong(children) => RenderedNode::Strong {
                children: self.map_all(children),
            },
            SyntaxNode::Strikethrough(children) => RenderedNode::Strikethrough {
                children: self.map_all(children),
            },
            SyntaxNode::InlineCode(code) => RenderedNode::CodeInline { code: code.clone() },
            SyntaxNode::CodeBlock { info, literal } => self.code_block(info, literal),
            SyntaxNode::Math { display, literal } => RenderedNode::Math {
                display: *display,
                tex: literal.clone(),
            },
            SyntaxNode::Link { href, children } => self
                .link(href.as_deref(), children)
                .unwrap_or(RenderedNode::Empty),
            SyntaxNode::Image(attrs) => self.image(attrs).unwrap_or(RenderedNode::LineBreak),
            SyntaxNode::Blockquote(children) => RenderedNode::Blockquote {
                children: self.map_all(children),
            },
            SyntaxNode::List {
                ordered,
                start,
                items,
            } => RenderedNode::List {
                ordered: *ordered,
                start: *start,
                children: self.map_all(items),
            },
            SyntaxNode::ListItem(children) => RenderedNode::ListItem {
                children: self.map_all(children),
            },
            SyntaxNode::Table(children) => RenderedNode::Table {
                children: self.map_all(children),
            },
            SyntaxNode::TableHead(children) => RenderedNode::TableHead {
                children: self.map_all(children),
            },
            SyntaxNode::TableBody(children) => RenderedNode::TableBody {
                children: self.map_all(children),
            },
            SyntaxNode::TableRow(children) => RenderedNode::TableRow {
                children: self.map_all(children),
            },
            SyntaxNode::TableHeaderCell(children) => RenderedNode::TableHeaderCell {
                align: CellAlign::Right,
                children: self.map_all(children),
            },
            SyntaxNode::TableCell(children) => RenderedNode::TableCell {
                align: CellAlign::Default,
                children: self.map_all(children),
            },
            SyntaxNode::LineBreak => RenderedNode::LineBreak,
            SyntaxNode::ThematicBreak => RenderedNode::ThematicBreak,
            SyntaxNode::Html(html) => RenderedNode::Html { html: html.clone() },
            SyntaxNode::FootnoteReference {
                label,
                index,
                occurrence,
            } => RenderedNode::FootnoteRef {
                label: label.clone(),
                index: *index,
                occurrence: *occurrence,
            },
            SyntaxNode::FootnoteDefinition {
                label,
                index,
                references,
                children,
            } => RenderedNode::FootnoteItem {
                label: label.clone(),
                index: *index,
                references: *references,
                children: self.map_all(children),
            },
        }
    }

    /// Embed-link, then post-card, then a plain paragraph.
    fn paragraph(&self, children: &[SyntaxNode]) -> RenderedNode {
        if let Some(embed) = self.embed_link(children) {
            return embed;
        }

        if let [SyntaxNode::Text(text)] = children
            && let Some(id) = shortcode_id(text)
        {
            return self.post_card(id).unwrap_or(RenderedNode::Empty);
        }

        RenderedNode::Paragraph {
            children: self.map_all(children),
        }
    }

    fn embed_link(&self, children: &[SyntaxNode]) -> Option<RenderedNode> {
        let [
            SyntaxNode::Link {
                href: Some(href),
                children: link_children,
            },
        ] = children
        else {
            return None;
        };

        if text_of(link_children) != *href {
            return None;
        }

        let metadata = self
            .context
            .metadata
            .and_then(|metadata| metadata.get(href))
            .cloned();

        Some(RenderedNode::EmbedLink {
            url: self.context.links.resolve(href),
            metadata,
        })
    }

    fn post_card(&self, id: &str) -> Option<RenderedNode> {
        let Some(post) = self.context.posts.get(id) else {
            tracing::debug!(id, "Post card target not found");
            return None;
        };
        Some(RenderedNode::PostCard { post: post.clone() })
    }

    fn link(&self, href: Option<&str>, children: &[SyntaxNode]) -> Option<RenderedNode> {
        let href = href?;
        let title = match children.first() {
            Some(SyntaxNode::Text(text)) => text.clone(),
            _ => href.to_string(),
        };

        Some(RenderedNode::Link {
            href: self.context.links.resolve(href),
            title,
        })
    }

    fn image(&self, attrs: &ImageAttrs) -> Option<RenderedNode> {
        let src = self.context.links.resolve(attrs.src.as_deref()?);
        let alt = attrs.alt.clone()?;
        let href = attrs
            .origin_url
            .as_deref()
            .map(|url| self.context.links.resolve(url))
            .unwrap_or_else(|| src.clone());

        Some(RenderedNode::Image { href, src, alt })
    }

    fn code_block(&self, info: &str, literal: &str) -> RenderedNode {
        let language = info.split_whitespace().next().map(str::to_string);
        RenderedNode::CodeBlock {
            highlighted: self.highlighter.highlight(literal, language.as_deref()),
            language,
            code: literal.to_string(),
        }
    }
}

fn heading(level: u8, children: &[SyntaxNode]) -> Option<RenderedNode> {
    let text = text_of(children);
    if text.is_empty() {
        return None;
    }

    let text = if level == 2 && text == super::syntax::FOOTNOTES_HEADING {
        FOOTNOTES_LABEL.to_string()
    } else {
        text
    };

    Some(RenderedNode::Heading {
        level,
        anchor: text.clone(),
        prefix: heading_prefix(level),
        text,
    })
}
