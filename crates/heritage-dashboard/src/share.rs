//! Share message construction and the platform share seam.

use heritage_core::HeritageSite;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Characters `encodeURIComponent` leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share dismissed by the user")]
    Dismissed,

    #[error("platform share failed: {0}")]
    Platform(String),
}

/// Platform sharing facility (share sheet, clipboard, stdout...).
pub trait Sharer: Send + Sync {
    /// Hands `message` to the platform.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError`] when the platform rejects or abandons the share.
    fn share(&self, message: &str) -> Result<(), ShareError>;
}

/// Deep link to a site on the source page: the page URL with the encoded
/// title as its fragment. Any fragment already on `source_url` is replaced.
#[must_use]
pub fn share_link(source_url: &str, title: &str) -> String {
    let page = source_url
        .split_once('#')
        .map_or(source_url, |(page, _)| page);
    format!("{page}#{}", utf8_percent_encode(title, URI_COMPONENT))
}

/// `"<link>\n\n<image>"`, where `<link>` comes from [`share_link`].
#[must_use]
pub fn share_message(source_url: &str, site: &HeritageSite) -> String {
    format!("{}\n\n{}", share_link(source_url, &site.title), site.image)
}
