//! Markdown view mapping.
//!
//! A document is parsed with comrak into a closed set of syntax nodes, then
//! rewritten into rendered nodes ready for the view layer: headings with
//! anchors, embed links, post cards, image cards, highlighted code.

mod links;
mod mapper;
mod renderer;
mod syntax;

pub use links::LinkResolver;
pub use mapper::{
    CellAlign, FOOTNOTES_LABEL, Mapper, RenderContext, RenderedNode, RenderedTree, heading_prefix,
};
pub use renderer::MarkdownRenderer;
pub use syntax::{FOOTNOTES_HEADING, ImageAttrs, SyntaxNode};
