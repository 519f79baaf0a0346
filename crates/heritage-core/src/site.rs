//! Heritage site records and the keys interaction state is stored under.
//!
//! A [`HeritageSite`] is produced once per fetch by the extraction pipeline
//! and never mutated afterwards. Missing fields are filled with the
//! [`NO_TITLE`] / [`NO_DESCRIPTION`] sentinels or an empty image URL, so every
//! record is always renderable.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Title used when a container has no `h3`.
pub const NO_TITLE: &str = "No title available";

/// Description used when a container has no `p`.
pub const NO_DESCRIPTION: &str = "No description available";

/// Number of characters shown for a collapsed description.
pub const DEFAULT_SUMMARY_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageSite {
    /// 0-based index of this record in the emitted list.
    pub position: usize,
    pub title: String,
    pub description: String,
    /// Absolute image URL, or `""` when the container had no usable `img`.
    pub image: String,
}

impl HeritageSite {
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Description text as the list shows it.
    ///
    /// A collapsed description is always the first `limit` characters (or
    /// fewer, if shorter) followed by `"..."`, even when nothing was cut.
    /// Expanded descriptions are returned verbatim.
    #[must_use]
    pub fn display_description(&self, expanded: bool, limit: usize) -> Cow<'_, str> {
        if expanded {
            return Cow::Borrowed(&self.description);
        }
        let cut = self
            .description
            .char_indices()
            .nth(limit)
            .map_or(self.description.len(), |(idx, _)| idx);
        Cow::Owned(format!("{}...", &self.description[..cut]))
    }
}

/// Key under which a site's interaction state is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteKey(String);

impl SiteKey {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SiteKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SiteKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for SiteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a [`SiteKey`] is derived from a site.
///
/// `Title` keeps the legacy behavior where two sites sharing a title share
/// their favorite/dislike/expand flags. `Position` and `ContentHash` give
/// each record its own entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    #[default]
    Title,
    Position,
    ContentHash,
}

impl KeyPolicy {
    #[must_use]
    pub fn key_for(self, site: &HeritageSite) -> SiteKey {
        match self {
            KeyPolicy::Title => SiteKey::new(site.title.as_str()),
            KeyPolicy::Position => SiteKey(format!("#{}", site.position)),
            KeyPolicy::ContentHash => {
                let input = format!("{}\x00{}\x00{}", site.title, site.description, site.image);
                SiteKey(format!("{:x}", Sha256::digest(input.as_bytes())))
            }
        }
    }
}

impl std::fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyPolicy::Title => write!(f, "title"),
            KeyPolicy::Position => write!(f, "position"),
            KeyPolicy::ContentHash => write!(f, "content-hash"),
        }
    }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
