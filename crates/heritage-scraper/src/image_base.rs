//! Resolution of `img src` values found on the content page.

use std::fmt;

use reqwest::Url;

/// Root that relative image paths on a page resolve against.
///
/// Bare-relative paths (`images/a.jpg`) land at the site root, not under the
/// page's own directory, so `<page>/about/sites` and `<page>/` produce the
/// same image URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageBase {
    /// Site root of a page URL that parsed as a hierarchical URL.
    Root(Url),
    /// Prefix taken from a page URL that did not parse; paths are appended
    /// to it as-is.
    Prefix(String),
}

impl ImageBase {
    #[must_use]
    pub fn for_page(page_url: &str) -> Self {
        let root = Url::parse(page_url)
            .and_then(|url| Url::parse(&url.origin().ascii_serialization()));

        match root {
            Ok(root) => Self::Root(root),
            Err(e) => {
                tracing::warn!(page_url, error = %e, "page URL has no usable root; image paths will be appended verbatim");
                Self::Prefix(leading_host_part(page_url))
            }
        }
    }

    /// Absolute URL for an `img` `src`; `None` when `src` is blank.
    ///
    /// Absolute `src` values pass through unchanged.
    #[must_use]
    pub fn resolve(&self, src: &str) -> Option<String> {
        let src = src.trim();
        if src.is_empty() {
            return None;
        }

        match self {
            Self::Root(root) => match root.join(src) {
                Ok(url) => Some(url.into()),
                Err(e) => {
                    tracing::warn!(root = %self, src, error = %e, "could not join image src; appending");
                    Some(format!("{self}{src}"))
                }
            },
            Self::Prefix(prefix) => Some(format!("{prefix}{src}")),
        }
    }
}

impl fmt::Display for ImageBase {
    /// `scheme://host[:port]` with no trailing slash.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root(root) => f.write_str(&root.origin().ascii_serialization()),
            Self::Prefix(prefix) => f.write_str(prefix),
        }
    }
}

/// `scheme://host` of something that looked like a URL, or the input without
/// trailing slashes when it has no scheme.
fn leading_host_part(page_url: &str) -> String {
    let trimmed = page_url.trim_end_matches('/');
    match trimmed.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            format!("{scheme}://{host}")
        }
        None => trimmed.to_owned(),
    }
}

#[cfg(test)]
#[path = "image_base_test.rs"]
mod tests;
