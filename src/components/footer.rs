//! Page footer

use chrono::{Datelike, Local};
use maud::{Markup, html};

use super::ViewContext;
use crate::routes;

/// Renders the copyright footer for the current year.
pub fn footer(view: &ViewContext) -> Markup {
    footer_for_year(view, Local::now().year())
}

fn footer_for_year(view: &ViewContext, year: i32) -> Markup {
    html! {
        footer.site-footer {
            p.copyright {
                "Copyright © "
                a href=(view.href(routes::HOME)) { (view.site.author_name) }
                " "
                (year)
                "."
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
    fn test_footer_copyright() {
        let site = site_config();
        let links = LinkResolver::default();
        let view = ViewContext::new(&site, &links, DisplayMode::Light);
        let html = footer_for_year(&view, 2024).into_string();
        assert!(html.contains(r#"Copyright © <a href="/index.html">Sam</a> 2024."#), "{}", html);
    }
}
