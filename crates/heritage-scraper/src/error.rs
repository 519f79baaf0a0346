use thiserror::Error;

/// Failures that stop the fetch→parse→extract pipeline.
///
/// Parsing and per-field extraction never fail; only getting the page does.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("fetch cancelled before completion")]
    Cancelled,
}
