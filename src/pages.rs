//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (index, article,
//! article list, tags, preview). Each page module builds its body from the
//! shared components and wraps it with [`site_page`].

pub mod article;
pub mod articles;
pub mod index;
pub mod preview;
pub mod tags;

use maud::Markup;

use crate::assets::STYLESHEETS;
use crate::components::ViewContext;
use crate::components::layout::{PageMeta, page_wrapper};
use crate::routes;

/// Wraps a page body with the site layout and the bundled stylesheets.
pub fn site_page(meta: &PageMeta, view: &ViewContext, body: Markup) -> Markup {
    let stylesheets: Vec<String> = STYLESHEETS
        .iter()
        .map(|name| routes::stylesheet(name))
        .collect();
    let stylesheets: Vec<&str> = stylesheets.iter().map(String::as_str).collect();
    page_wrapper(meta, view, &stylesheets, body)
}
