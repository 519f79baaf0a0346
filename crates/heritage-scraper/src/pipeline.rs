//! The fetch→parse→extract sequence that produces the site list.

use heritage_core::HeritageSite;
use tokio_util::sync::CancellationToken;

use crate::client::DocumentFetcher;
use crate::error::FetchError;
use crate::extract::RecordExtractor;
use crate::markup::Document;

/// Fetches the content source once and extracts its heritage sites.
///
/// Only the fetch step can fail or suspend. Parsing and extraction run to
/// completion synchronously once the body has arrived.
pub struct SitePipeline<F> {
    fetcher: F,
    extractor: RecordExtractor,
    source_url: String,
}

impl<F: DocumentFetcher> SitePipeline<F> {
    pub fn new(fetcher: F, extractor: RecordExtractor, source_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            extractor,
            source_url: source_url.into(),
        }
    }

    /// Runs the pipeline to completion.
    ///
    /// An empty `Ok` means the page was fetched but held no sites.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] from the fetch step.
    pub async fn run(&self) -> Result<Vec<HeritageSite>, FetchError> {
        self.run_with_cancel(&CancellationToken::new()).await
    }

    /// Runs the pipeline, abandoning the fetch if `cancel` fires first.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Cancelled`] when cancelled, otherwise the
    /// [`FetchError`] from the fetch step.
    pub async fn run_with_cancel(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<HeritageSite>, FetchError> {
        let body = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!(url = %self.source_url, "fetch cancelled");
                return Err(FetchError::Cancelled);
            }
            result = self.fetcher.fetch(&self.source_url) => result?,
        };

        let sites = self.extract_from_markup(&body);
        tracing::info!(url = %self.source_url, records = sites.len(), "extracted heritage sites");
        Ok(sites)
    }

    /// Parses `markup` and extracts its sites without fetching.
    #[must_use]
    pub fn extract_from_markup(&self, markup: &str) -> Vec<HeritageSite> {
        let doc = Document::parse(markup);
        self.extractor.extract(&doc)
    }
}
