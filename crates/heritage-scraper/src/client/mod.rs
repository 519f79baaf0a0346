//! HTTP fetching of the content source page.

use std::time::Duration;

use async_trait::async_trait;
use heritage_core::AppConfig;
use reqwest::Client;

use crate::error::FetchError;

/// Source of raw markup for the extraction pipeline.
///
/// One call is one attempt: implementations do not retry.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetches the full body of `url` as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the page cannot be retrieved.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP client for the content source page.
///
/// By default any response whose body can be read counts as success, whatever
/// its status. With `require_success_status` set, non-2xx responses fail with
/// [`FetchError::HttpStatus`].
pub struct PageClient {
    client: Client,
    require_success_status: bool,
}

impl PageClient {
    /// Creates a `PageClient` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        require_success_status: bool,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            require_success_status,
        })
    }

    /// Builds a client from the scraper settings in [`AppConfig`].
    ///
    /// # Errors
    ///
    /// See [`PageClient::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(
            config.request_timeout_secs,
            &config.user_agent,
            config.require_success_status,
        )
    }

    /// Issues a single GET for `url` and returns the body as text.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] — `url` is not an absolute URL.
    /// - [`FetchError::Network`] — connection, TLS, timeout or body read failure.
    /// - [`FetchError::HttpStatus`] — non-2xx status while `require_success_status` is set.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if self.require_success_status {
                return Err(FetchError::HttpStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }
            tracing::warn!(url, status = status.as_u16(), "non-success status; using body anyway");
        }

        let body = response.text().await?;
        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "fetched page");
        Ok(body)
    }
}

#[async_trait]
impl DocumentFetcher for PageClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.fetch_page(url).await
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
