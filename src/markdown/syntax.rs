//! Parse stage: comrak AST to a closed set of syntax nodes.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};
use regex::Regex;
use std::sync::LazyLock;

/// Heading text that introduces the collected footnote definitions.
pub const FOOTNOTES_HEADING: &str = "Footnotes";

static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<img\b([^>]*?)/?>").expect("img tag pattern is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][A-Za-z0-9_.:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .expect("attribute pattern is valid")
});

/// Attributes of an image, each optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAttrs {
    pub src: Option<String>,
    pub alt: Option<String>,
    /// Full-size original of an externally hosted image.
    pub origin_url: Option<String>,
}

/// Node of the parsed markdown tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Heading {
        level: u8,
        children: Vec<SyntaxNode>,
    },
    Paragraph(Vec<SyntaxNode>),
    Text(String),
    Emphasis(Vec<SyntaxNode>),
    Strong(Vec<SyntaxNode>),
    Strikethrough(Vec<SyntaxNode>),
    InlineCode(String),
    CodeBlock {
        info: String,
        literal: String,
    },
    Math {
        display: bool,
        literal: String,
    },
    Link {
        href: Option<String>,
        children: Vec<SyntaxNode>,
    },
    Image(ImageAttrs),
    Blockquote(Vec<SyntaxNode>),
    List {
        ordered: bool,
        start: usize,
        items: Vec<SyntaxNode>,
    },
    ListItem(Vec<SyntaxNode>),
    Table(Vec<SyntaxNode>),
    TableHead(Vec<SyntaxNode>),
    TableBody(Vec<SyntaxNode>),
    TableRow(Vec<SyntaxNode>),
    TableHeaderCell(Vec<SyntaxNode>),
    TableCell(Vec<SyntaxNode>),
    LineBreak,
    ThematicBreak,
    Html(String),
    /// `occurrence` counts references to the same footnote, starting at 1.
    FootnoteReference {
        label: String,
        index: usize,
        occurrence: usize,
    },
    /// `references` is how often the footnote is referenced.
    FootnoteDefinition {
        label: String,
        index: usize,
        references: usize,
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    /// Child nodes of container kinds, empty for leaves.
    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            SyntaxNode::Heading { children, .. }
            | SyntaxNode::Link { children, .. }
            | SyntaxNode::FootnoteDefinition { children, .. } => children,
            SyntaxNode::List { items, .. } => items,
            SyntaxNode::Paragraph(children)
            | SyntaxNode::Emphasis(children)
            | SyntaxNode::Strong(children)
            | SyntaxNode::Strikethrough(children)
            | SyntaxNode::Blockquote(children)
            | SyntaxNode::ListItem(children)
            | SyntaxNode::Table(children)
            | SyntaxNode::TableHead(children)
            | SyntaxNode::TableBody(children)
            | SyntaxNode::TableRow(children)
            | SyntaxNode::TableHeaderCell(children)
            | SyntaxNode::TableCell(children) => children,
            SyntaxNode::Text(_)
            | SyntaxNode::InlineCode(_)
            | SyntaxNode::CodeBlock { .. }
            | SyntaxNode::Math { .. }
            | SyntaxNode::Image(_)
            | SyntaxNode::LineBreak
            | SyntaxNode::ThematicBreak
            | SyntaxNode::Html(_)
            | SyntaxNode::FootnoteReference { .. } => &[],
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            SyntaxNode::Text(text) | SyntaxNode::InlineCode(text) => out.push_str(text),
            SyntaxNode::Math { literal, .. } => out.push_str(literal),
            other => {
                for child in other.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Concatenated text of a node sequence.
pub fn text_of(nodes: &[SyntaxNode]) -> String {
    nodes.iter().map(SyntaxNode::text_content).collect()
}

/// Parses a markdown document into syntax nodes.
///
/// Footnote definitions are moved to a trailing section headed by a level 2
/// [`FOOTNOTES_HEADING`] heading, numbered in order of first reference.
pub fn parse(document: &str, options: &Options) -> Vec<SyntaxNode> {
    let arena = Arena::new();
    let root = parse_document(&arena, document, options);

    let mut converter = Converter::new(root);
    let mut nodes = converter.children(root);
    nodes.extend(converter.footnote_section());
    nodes
}

struct Converter {
    /// Lowercased footnote labels in order of first reference.
    footnote_order: Vec<String>,
    /// Reference count per footnote, parallel to `footnote_order`.
    reference_counts: Vec<usize>,
    /// References converted so far per footnote.
    seen: Vec<usize>,
    definitions: Vec<(String, Vec<SyntaxNode>)>,
}

impl Converter {
    fn new<'a>(root: &'a AstNode<'a>) -> Self {
        let mut footnote_order: Vec<String> = Vec::new();
        let mut reference_counts: Vec<usize> = Vec::new();
        for node in root.descendants() {
            if let NodeValue::FootnoteReference(reference) = &node.data.borrow().value {
                let label = reference.name.to_lowercase();
                match footnote_order.iter().position(|known| *known == label) {
                    Some(i) => reference_counts[i] += 1,
                    None => {
                        footnote_order.push(label);
                        reference_counts.push(1);
                    }
                }
            }
        }

        Self {
            seen: vec![0; footnote_order.len()],
            footnote_order,
            reference_counts,
            definitions: Vec::new(),
        }
    }

    fn footnote_index(&self, label: &str) -> Option<usize> {
        let label = label.to_lowercase();
        self.footnote_order
            .iter()
            .position(|known| *known == label)
            .map(|i| i + 1)
    }

    /// Converts all children of a node, merging adjacent text.
    fn children<'a>(&mut self, node: &'a AstNode<'a>) -> Vec<SyntaxNode> {
        let mut result: Vec<SyntaxNode> = Vec::new();
        for child in node.children() {
            for converted in self.convert(child) {
                if let SyntaxNode::Text(text) = &converted
                    && let Some(SyntaxNode::Text(previous)) = result.last_mut()
                {
                    previous.push_str(text);
                    continue;
                }
                result.push(converted);
            }
        }
        result
    }

    fn convert<'a>(&mut self, node: &'a AstNode<'a>) -> Vec<SyntaxNode> {
        let value = node.data.borrow().value.clone();
        let converted = match value {
            NodeValue::Heading(heading) => SyntaxNode::Heading {
                level: heading.level,
                children: self.children(node),
            },
            NodeValue::Paragraph => SyntaxNode::Paragraph(self.children(node)),
            NodeValue::Text(text) => SyntaxNode::Text(text),
            NodeValue::SoftBreak | NodeValue::LineBreak => SyntaxNode::LineBreak,
            NodeValue::Emph => SyntaxNode::Emphasis(self.children(node)),
            NodeValue::Strong => SyntaxNode::Strong(self.children(node)),
            NodeValue::Strikethrough => SyntaxNode::Strikethrough(self.children(node)),
            NodeValue::Code(code) => SyntaxNode::InlineCode(code.literal),
            NodeValue::CodeBlock(block) => SyntaxNode::CodeBlock {
                info: block.info,
                literal: block.literal,
            },
            NodeValue::Math(math) => SyntaxNode::Math {
                display: math.display_math,
                literal: math.literal,
            },
            NodeValue::Link(link) => SyntaxNode::Link {
                href: Some(link.url).filter(|url| !url.is_empty()),
                children: self.children(node),
            },
            NodeValue::Image(link) => SyntaxNode::Image(ImageAttrs {
                src: Some(link.url),
                alt: Some(text_of(&self.children(node))),
                origin_url: None,
            }),
            NodeValue::BlockQuote => SyntaxNode::Blockquote(self.children(node)),
            NodeValue::List(list) => SyntaxNode::List {
                ordered: list.list_type == ListType::Ordered,
                start: list.start,
                items: self.children(node),
            },
            NodeValue::Item(_) => SyntaxNode::ListItem(self.children(node)),
            NodeValue::Table(_) => return vec![self.table(node)],
            NodeValue::ThematicBreak => SyntaxNode::ThematicBreak,
            NodeValue::HtmlBlock(block) => return raw_html(&block.literal),
            NodeValue::HtmlInline(html) => return raw_html(&html),
            NodeValue::FootnoteReference(reference) => match self.footnote_index(&reference.name)
            {
                Some(index) => {
                    self.seen[index - 1] += 1;
                    SyntaxNode::FootnoteReference {
                        label: reference.name,
                        index,
                        occurrence: self.seen[index - 1],
                    }
                }
                None => SyntaxNode::Text(format!("[^{}]", reference.name)),
            },
            NodeValue::FootnoteDefinition(definition) => {
                let children = self.children(node);
                self.definitions.push((definition.name, children));
                return Vec::new();
            }
            NodeValue::FrontMatter(_) => return Vec::new(),
            _ => return self.children(node),
        };
        vec![converted]
    }

    /// Splits a table into head and body sections.
    fn table<'a>(&mut self, node: &'a AstNode<'a>) -> SyntaxNode {
        let mut head = Vec::new();
        let mut body = Vec::new();

        for row in node.children() {
            let is_header = match &row.data.borrow().value {
                NodeValue::TableRow(header) => *header,
                _ => continue,
            };

            let cells: Vec<SyntaxNode> = row
                .children()
                .map(|cell| {
                    let children = self.children(cell);
                    if is_header {
                        SyntaxNode::TableHeaderCell(children)
                    } else {
                        SyntaxNode::TableCell(children)
                    }
                })
                .collect();

            if is_header {
                head.push(SyntaxNode::TableRow(cells));
            } else {
                body.push(SyntaxNode::TableRow(cells));
            }
        }

        let mut sections = vec![SyntaxNode::TableHead(head)];
        if !body.is_empty() {
            sections.push(SyntaxNode::TableBody(body));
        }
        SyntaxNode::Table(sections)
    }

    /// Builds the trailing footnotes section, empty when nothing is referenced.
    fn footnote_section(&mut self) -> Vec<SyntaxNode> {
        let mut items: Vec<SyntaxNode> = std::mem::take(&mut self.definitions)
            .into_iter()
            .filter_map(|(label, children)| {
                let index = self.footnote_index(&label)?;
                Some(SyntaxNode::FootnoteDefinition {
                    label,
                    index,
                    references: self.reference_counts[index - 1],
                    children,
                })
            })
            .collect();

        if items.is_empty() {
            return Vec::new();
        }

        items.sort_by_key(|item| match item {
            SyntaxNode::FootnoteDefinition { index, .. } => *index,
            _ => usize::MAX,
        });

        vec![
            SyntaxNode::Heading {
                level: 2,
                children: vec![SyntaxNode::Text(FOOTNOTES_HEADING.to_string())],
            },
            SyntaxNode::List {
                ordered: true,
                start: 1,
                items,
            },
        ]
    }
}

/// Splits raw HTML into image nodes for each `<img>` tag and HTML nodes for
/// the fragments around them. Whitespace between tags is dropped.
fn raw_html(html: &str) -> Vec<SyntaxNode> {
    let mut nodes = Vec::new();
    let mut rest = 0;

    for captures in IMG_TAG.captures_iter(html) {
        let Some(tag) = captures.get(0) else {
            continue;
        };
        push_html_fragment(&mut nodes, &html[rest..tag.start()]);
        let source = captures.get(1).map_or("", |m| m.as_str());
        nodes.push(SyntaxNode::Image(image_attrs(source)));
        rest = tag.end();
    }

    if rest == 0 {
        return vec![SyntaxNode::Html(html.to_string())];
    }
    push_html_fragment(&mut nodes, &html[rest..]);
    nodes
}

fn push_html_fragment(nodes: &mut Vec<SyntaxNode>, fragment: &str) {
    if !fragment.trim().is_empty() {
        nodes.push(SyntaxNode::Html(fragment.to_string()));
    }
}

fn image_attrs(source: &str) -> ImageAttrs {
    let mut attrs = ImageAttrs::default();
    for attribute in ATTRIBUTE.captures_iter(source) {
        let value = attribute
            .get(2)
            .or_else(|| attribute.get(3))
            .or_else(|| attribute.get(4))
            .map(|m| decode_entities(m.as_str()));

        match attribute[1].to_ascii_lowercase().as_str() {
            "src" => attrs.src = value,
            "alt" => attrs.alt = value,
            "origin_url" => attrs.origin_url = value,
            _ => {}
        }
    }
    attrs
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Options<'static> {
        let mut options = Options::default();
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.footnotes = true;
        options.extension.math_dollars = true;
        options
    }

    fn parse_one(markdown: &str) -> SyntaxNode {
        let mut nodes = parse(markdown, &options());
        assert_eq!(nodes.len(), 1, "Expected a single node: {:?}", nodes);
        nodes.remove(0)
    }

    #[test]
    fn test_parse_heading() {
        // Arrange & Act
        let node = parse_one("### Hello *world*");

        // Assert
        match &node {
            SyntaxNode::Heading { level, .. } => assert_eq!(*level, 3),
            other => panic!("Expected heading, got {:?}", other),
        }
        assert_eq!(node.text_content(), "Hello world");
    }

    #[test]
    fn test_adjacent_text_is_merged() {
        let node = parse_one("a [b c");
        assert_eq!(
            node,
            SyntaxNode::Paragraph(vec![SyntaxNode::Text("a [b c".to_string())])
        );
    }

    #[test]
    fn test_soft_break_becomes_line_break() {
        let node = parse_one("first\nsecond");
        assert_eq!(
            node,
            SyntaxNode::Paragraph(vec![
                SyntaxNode::Text("first".to_string()),
                SyntaxNode::LineBreak,
                SyntaxNode::Text("second".to_string()),
            ])
        );
    }

    #[test]
    fn test_autolink_literal() {
        // Arrange & Act
        let node = parse_one("https://example.com/x");

        // Assert
        assert_eq!(
            node,
            SyntaxNode::Paragraph(vec![SyntaxNode::Link {
                href: Some("https://example.com/x".to_string()),
                children: vec![SyntaxNode::Text("https://example.com/x".to_string())],
            }])
        );
    }

    #[test]
    fn test_markdown_image() {
        let node = parse_one("![A caption](a.png)");
        assert_eq!(
            node,
            SyntaxNode::Paragraph(vec![SyntaxNode::Image(ImageAttrs {
                src: Some("a.png".to_string()),
                alt: Some("A caption".to_string()),
                origin_url: None,
            })])
        );
    }

    #[test]
    fn test_raw_img_block_with_origin_url() {
        // Arrange & Act
        let node =
            parse_one(r#"<img src="a.png" alt="A &amp; B" origin_url="https://cdn/a-full.png">"#);

        // Assert
        assert_eq!(
            node,
            SyntaxNode::Image(ImageAttrs {
                src: Some("a.png".to_string()),
                alt: Some("A & B".to_string()),
                origin_url: Some("https://cdn/a-full.png".to_string()),
            })
        );
    }

    #[test]
    fn test_raw_img_without_alt() {
        let node = parse_one("<img src='a.png' />");
        assert_eq!(
            node,
            SyntaxNode::Image(ImageAttrs {
                src: Some("a.png".to_string()),
                alt: None,
                origin_url: None,
            })
        );
    }

    #[test]
    fn test_consecutive_raw_imgs_are_split() {
        // Arrange
        let markdown = "<img src=\"a.png\" origin_url=\"https://cdn/a-full.png\" alt=\"A\">\n<img src=\"b.png\">\n";

        // Act
        let nodes = parse(markdown, &options());

        // Assert
        assert_eq!(
            nodes,
            vec![
                SyntaxNode::Image(ImageAttrs {
                    src: Some("a.png".to_string()),
                    alt: Some("A".to_string()),
                    origin_url: Some("https://cdn/a-full.png".to_string()),
                }),
                SyntaxNode::Image(ImageAttrs {
                    src: Some("b.png".to_string()),
                    alt: None,
                    origin_url: None,
                }),
            ]
        );
    }

    #[test]
    fn test_wrapped_raw_img_is_lifted() {
        // Arrange & Act
        let nodes = parse("<p align=\"center\"><img src=\"a.png\" alt=\"A\"></p>\n", &options());

        // Assert
        assert_eq!(nodes.len(), 3, "Open tag, image, close tag: {:?}", nodes);
        assert_eq!(nodes[0], SyntaxNode::Html("<p align=\"center\">".to_string()));
        assert!(matches!(&nodes[1], SyntaxNode::Image(attrs) if attrs.alt.as_deref() == Some("A")));
        assert!(matches!(&nodes[2], SyntaxNode::Html(html) if html.trim() == "</p>"));
    }

    #[test]
    fn test_other_raw_html_kept() {
        let node = parse_one("<div class=\"note\">\nhi\n</div>");
        match node {
            SyntaxNode::Html(html) => assert!(html.contains("class=\"note\"")),
            other => panic!("Expected html, got {:?}", other),
        }
    }

    #[test]
    fn test_math() {
        // Arrange & Act
        let nodes = parse("inline $x^2$\n\n$$y = mx$$\n", &options());

        // Assert
        assert_eq!(
            nodes[0],
            SyntaxNode::Paragraph(vec![
                SyntaxNode::Text("inline ".to_string()),
                SyntaxNode::Math {
                    display: false,
                    literal: "x^2".to_string(),
                },
            ])
        );
        let display = nodes[1].children().iter().any(|n| {
            matches!(n, SyntaxNode::Math { display: true, literal } if literal.contains("y = mx"))
        });
        assert!(display, "Expected display math in {:?}", nodes[1]);
    }

    #[test]
    fn test_table_sections() {
        // Arrange
        let markdown = "| A | B |\n|--:|:--|\n| 1 | 2 |\n| 3 | 4 |\n";

        // Act
        let node = parse_one(markdown);

        // Assert
        let SyntaxNode::Table(sections) = &node else {
            panic!("Expected table, got {:?}", node);
        };
        assert_eq!(sections.len(), 2);
        assert!(matches!(&sections[0], SyntaxNode::TableHead(rows) if rows.len() == 1));
        assert!(matches!(&sections[1], SyntaxNode::TableBody(rows) if rows.len() == 2));
        assert!(matches!(
            &sections[0].children()[0].children()[0],
            SyntaxNode::TableHeaderCell(_)
        ));
        assert!(matches!(
            &sections[1].children()[0].children()[0],
            SyntaxNode::TableCell(_)
        ));
    }

    #[test]
    fn test_fenced_code_block() {
        let node = parse_one("```rust title\nfn main() {}\n```\n");
        assert_eq!(
            node,
            SyntaxNode::CodeBlock {
                info: "rust title".to_string(),
                literal: "fn main() {}\n".to_string(),
            }
        );
    }

    #[test]
    fn test_footnotes_collected_at_end() {
        // Arrange
        let markdown = "First[^b] and second[^a].\n\n[^a]: Note A\n\n[^b]: Note B\n";

        // Act
        let nodes = parse(markdown, &options());

        // Assert
        assert_eq!(nodes.len(), 3, "Paragraph, heading, list: {:?}", nodes);
        assert!(nodes[0].children().contains(&SyntaxNode::FootnoteReference {
            label: "b".to_string(),
            index: 1,
            occurrence: 1,
        }));
        assert_eq!(nodes[1].text_content(), FOOTNOTES_HEADING);
        let SyntaxNode::List { ordered, items, .. } = &nodes[2] else {
            panic!("Expected footnote list, got {:?}", nodes[2]);
        };
        assert!(ordered);
        assert!(matches!(&items[0], SyntaxNode::FootnoteDefinition { label, index: 1, .. } if label == "b"));
        assert_eq!(items[1].text_content(), "Note A");
    }

    #[test]
    fn test_repeated_footnote_references_are_counted() {
        // Arrange
        let markdown = "Note[^1] and again[^1].\n\n[^1]: Source.\n";

        // Act
        let nodes = parse(markdown, &options());

        // Assert
        let occurrences: Vec<usize> = nodes[0]
            .children()
            .iter()
            .filter_map(|node| match node {
                SyntaxNode::FootnoteReference { occurrence, .. } => Some(*occurrence),
                _ => None,
            })
            .collect();
        assert_eq!(occurrences, vec![1, 2]);
        let SyntaxNode::List { items, .. } = &nodes[2] else {
            panic!("Expected footnote list, got {:?}", nodes[2]);
        };
        assert!(matches!(&items[0], SyntaxNode::FootnoteDefinition { references: 2, .. }));
    }

    #[test]
    fn test_no_footnote_section_without_footnotes() {
        let nodes = parse("plain", &options());
        assert_eq!(nodes.len(), 1);
    }
}
