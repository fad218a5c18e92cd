//! Colored tag buttons

use maud::{Markup, html};

use super::ViewContext;
use crate::color::TagPalette;
use crate::content::Tag;
use crate::routes;

/// Renders a tag as a link to its tag page
///
/// Colors come from [`TagPalette`] and are passed as CSS custom properties,
/// so hover styling stays in the stylesheet.
///
/// # Arguments
///
/// * `tag`: Tag with its theme color
/// * `view`: Page context (display mode picks the palette lightness)
///
/// # Returns
///
/// Tag button markup
pub fn tag_button(tag: &Tag, view: &ViewContext) -> Markup {
    let palette = TagPalette::generate(&tag.color, view.mode);
    html! {
        a.tag-button href=(view.href(&routes::tag(&tag.name))) style=(palette.css_variables()) {
            (tag.name)
        }
    }
}

/// Renders a row of tag buttons, nothing for an empty list.
pub fn tag_buttons(tags: &[Tag], view: &ViewContext) -> Markup {
    html! {
        @if !tags.is_empty() {
            div.tag-buttons {
                @for tag in tags {
                    (tag_button(tag, view))
                }
            }
        }
    }
}
