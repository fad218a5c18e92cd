//! URL layout of the generated site
//!
//! Routes are root-relative (`/articles/12.html`). Pages pass them through
//! [`LinkResolver::resolve`](crate::markdown::LinkResolver::resolve) to add
//! the base path, and [`output_path`] maps them onto the output directory.

use std::path::PathBuf;

pub const HOME: &str = "/index.html";

/// Article list page for an optional year filter.
///
/// Page 1 lives at `index.html`, later pages at `page-N.html`.
pub fn articles(year: Option<i32>, page: usize) -> String {
    let dir = match year {
        Some(year) => format!("/articles/{}", year),
        None => "/articles".to_string(),
    };
    if page <= 1 {
        format!("{}/index.html", dir)
    } else {
        format!("{}/page-{}.html", dir, page)
    }
}

pub fn article(slug: &str) -> String {
    format!("/articles/{}.html", encode_segment(slug))
}

pub fn tags() -> String {
    "/articles/tags/index.html".to_string()
}

pub fn tag(name: &str) -> String {
    format!("/articles/tags/{}.html", encode_segment(name))
}

/// Social card image of an article, shipped under `contents/static`.
pub fn thumbnail(slug: &str) -> String {
    format!("/static/images/thumbnail/{}.jpg", encode_segment(slug))
}

pub fn favicon() -> String {
    "/static/favicon.ico".to_string()
}

pub fn stylesheet(name: &str) -> String {
    format!("/assets/{}", name)
}

/// Relative file path of a route inside the output directory.
///
/// Percent escapes written by [`encode_segment`] are decoded back so files
/// on disk carry the original names. A segment that would decode into a path
/// separator or a `.`/`..` component keeps its encoded name, so every route
/// maps to exactly one file inside the output directory.
pub fn output_path(route: &str) -> PathBuf {
    route
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(file_name)
        .collect()
}

fn file_name(segment: &str) -> String {
    let decoded = decode_segment(segment);
    if decoded.contains(['/', '\\']) || decoded == "." || decoded == ".." {
        segment.to_string()
    } else {
        decoded
    }
}

/// Percent-encodes characters that cannot appear raw in a path segment.
pub fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(char::from(byte))
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

fn decode_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(hex) = segment.get(i + 1..i + 3)
            && let Ok(byte) = u8::from_str_radix(hex, 16)
        {
            decoded.push(byte);
            i += 3;
            continue;
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}
