//! Phosphor icon selection

use maud::{Markup, html};

/// Icon for the sidebar entry of a social network.
///
/// Matches the network name exactly as written in `config.json`; anything
/// unknown gets a hash icon.
///
/// # Arguments
///
/// * `name`: Network name (`GitHub`, `Twitter`, ...)
///
/// # Returns
///
/// Phosphor icon class name
pub fn sns_icon(name: &str) -> &'static str {
    match name {
        "GitHub" => "ph-github-logo",
        "Twitter" => "ph-twitter-logo",
        "Facebook" => "ph-facebook-logo",
        "LinkedIn" => "ph-linkedin-logo",
        "Instagram" => "ph-instagram-logo",
        "YouTube" => "ph-youtube-logo",
        _ => "ph-hash",
    }
}

/// Renders a Phosphor icon element.
pub fn icon(class: &str) -> Markup {
    html! {
        i class=(format!("ph {}", class)) {}
    }
}
