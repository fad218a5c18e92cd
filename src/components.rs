//! Reusable HTML components for page generation
//!
//! Maud component functions shared by every page type (index, article,
//! article list, tags, preview). Each takes a [`ViewContext`] carrying the
//! site settings, link resolution and display mode.

pub mod footer;
pub mod icons;
pub mod layout;
pub mod markdown_view;
pub mod metadata;
pub mod nav;
pub mod post_card;
pub mod sidebar;
pub mod skill_card;
pub mod tag_button;

use crate::config::DisplayMode;
use crate::markdown::LinkResolver;
use crate::site::SiteConfig;

/// Presentation context shared by all components of one page.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub site: &'a SiteConfig,
    pub links: &'a LinkResolver,
    pub mode: DisplayMode,
}

impl<'a> ViewContext<'a> {
    pub fn new(site: &'a SiteConfig, links: &'a LinkResolver, mode: DisplayMode) -> Self {
        Self { site, links, mode }
    }

    /// Public URL of a site route.
    pub fn href(&self, route: &str) -> String {
        self.links.resolve(route)
    }

    /// Public URL of a file under `contents/`, given as a relative path.
    pub fn asset(&self, path: &str) -> String {
        if path.contains("://") {
            return path.to_string();
        }
        self.links.resolve(&format!("/{}", path.trim_start_matches('/')))
    }
}
