//! Static site generator for a personal blog and portfolio.

mod assets;
pub mod avatar;
mod color;
pub mod components;
mod config;
pub mod content;
mod generators;
mod highlight;
pub mod markdown;
pub mod pages;
pub mod routes;
pub mod site;
mod util;

pub use assets::{inline_css, write_css_assets};
pub use color::{Hsl, TagPalette, hex_to_hsl, hsl_to_hex};
pub use config::{BuildArgs, Command, Config, DisplayMode, PreviewArgs};
pub use generators::{BuildOptions, BuildReport, build_site, load_site_articles, write_page};
pub use highlight::{Highlighter, escape_html};
pub use markdown::{LinkResolver, MarkdownRenderer, RenderContext, RenderedNode, RenderedTree};
pub use pages::preview::{PageType, Preview};
pub use util::{POSTS_PER_PAGE, format_date, page_count, page_slice, parse_timestamp};
