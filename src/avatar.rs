//! Fallback avatar for authors without a profile image
//!
//! Pastel circle with the author's initial, colored from a hash of the name.

use maud::{Markup, PreEscaped, html};

const COLORS: &[&str] = &[
    "#dc8a78", "#dd7878", "#ea76cb", "#eba0ac", "#ca9ee6", "#cba6f7", "#b4befe", "#8caaee",
    "#85c1dc", "#74c7ec", "#81c8be", "#94e2d5", "#a6d189", "#c6d57e", "#e5c890", "#ef9f76",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME))
}

/// First character of the name, uppercased, or `?` for a blank name.
fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Generate SVG avatar from name
pub fn generate_svg(name: &str, size: u32) -> String {
    let h = hash(name);
    let bg = COLORS[(h % COLORS.len() as u64) as usize];
    let letter = escape_xml(&initial(name));

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100" role="img"><circle cx="50" cy="50" r="50" fill="{bg}"/><text x="50" y="50" dy="0.35em" text-anchor="middle" font-family="sans-serif" font-size="48" fill="white">{letter}</text></svg>"##
    )
}

/// Create inline SVG avatar element
pub fn render(name: &str, size: u32) -> Markup {
    html! { span class="avatar" aria-label=(name) { (PreEscaped(generate_svg(name, size))) } }
}
