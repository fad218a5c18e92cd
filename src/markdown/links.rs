//! Link resolution for site internal references.

/// Resolves root-relative links against the site base path.
///
/// A site deployed under `/blog` keeps writing `/articles/12.html` in its
/// markdown; the resolver turns that into `/blog/articles/12.html`. External
/// URLs, anchors and relative paths are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkResolver {
    base_path: String,
    domain: String,
}

impl LinkResolver {
    /// Creates a resolver for a site base path and public domain.
    ///
    /// # Arguments
    ///
    /// * `base_path`: Path prefix the site is served under (`""` for root)
    /// * `domain`: Public domain, used to recognise absolute internal URLs
    pub fn new(base_path: impl AsRef<str>, domain: impl Into<String>) -> Self {
        let trimmed = base_path.as_ref().trim().trim_matches('/');
        let base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };

        Self {
            base_path,
            domain: domain.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolves a link to its public URL.
    ///
    /// Only root-relative paths (`/x`, not `//host/x`) are rewritten, and a
    /// path that already starts with the base path is not prefixed twice.
    pub fn resolve(&self, link: &str) -> String {
        if self.base_path.is_empty() || !link.starts_with('/') || link.starts_with("//") {
            return link.to_string();
        }

        let already_prefixed = link
            .strip_prefix(&self.base_path)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        if already_prefixed {
            return link.to_string();
        }

        format!("{}{}", self.base_path, link)
    }

    /// Returns true for links that stay on this site.
    ///
    /// Anchors, root-relative paths and absolute URLs on the configured
    /// domain count as internal.
    pub fn is_internal(&self, href: &str) -> bool {
        if href.starts_with('#') || href.starts_with('/') {
            return true;
        }
        !self.domain.is_empty() && href.contains(&format!("://{}", self.domain))
    }
}
