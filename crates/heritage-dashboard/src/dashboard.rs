//! The object a presenter holds for the heritage site screen.
//!
//! `Dashboard` owns the record list produced by one pipeline run and the
//! [`InteractionStore`] the presenter reads on every render. It is the only
//! mutable state in the crate; nothing here is global.

use std::borrow::Cow;

use heritage_core::{AppConfig, HeritageSite, InteractionState, KeyPolicy, SiteKey};
use heritage_scraper::{DocumentFetcher, FetchError, SitePipeline};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::share::{share_message, ShareError, Sharer};
use crate::store::{Attention, InteractionStore};

/// Where the screen is in its single load.
///
/// `Ready` with an empty list ("no sites found") is a normal outcome and is
/// distinct from `Failed`.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(Vec<HeritageSite>),
    Failed(FetchError),
}

pub struct Dashboard {
    load_state: LoadState,
    store: InteractionStore,
    key_policy: KeyPolicy,
    summary_chars: usize,
    source_url: String,
    sharer: Box<dyn Sharer>,
}

impl Dashboard {
    pub fn new(
        source_url: impl Into<String>,
        key_policy: KeyPolicy,
        summary_chars: usize,
        sharer: Box<dyn Sharer>,
    ) -> Self {
        Self {
            load_state: LoadState::Loading,
            store: InteractionStore::new(),
            key_policy,
            summary_chars,
            source_url: source_url.into(),
            sharer,
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig, sharer: Box<dyn Sharer>) -> Self {
        Self::new(
            config.source_url.clone(),
            config.state_key,
            config.summary_chars,
            sharer,
        )
    }

    /// Runs `pipeline` and records the outcome.
    ///
    /// If `cancel` fires before the run completes (the screen went away), the
    /// result is discarded and the previous state is kept.
    pub async fn load<F: DocumentFetcher>(
        &mut self,
        pipeline: &SitePipeline<F>,
        cancel: &CancellationToken,
    ) -> &LoadState {
        match pipeline.run_with_cancel(cancel).await {
            Err(FetchError::Cancelled) => {}
            Ok(_) if cancel.is_cancelled() => {
                tracing::debug!("load finished after cancellation; discarding result");
            }
            Ok(sites) => {
                if sites.is_empty() {
                    tracing::info!(url = %self.source_url, "no heritage sites found");
                }
                self.load_state = LoadState::Ready(sites);
            }
            Err(e) => {
                tracing::error!(url = %self.source_url, error = %e, "failed to load heritage sites");
                self.load_state = LoadState::Failed(e);
            }
        }

        &self.load_state
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Loaded sites in document order; empty unless the load succeeded.
    #[must_use]
    pub fn sites(&self) -> &[HeritageSite] {
        match &self.load_state {
            LoadState::Ready(sites) => sites,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    /// First loaded site whose title is `title`.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&HeritageSite> {
        self.sites().iter().find(|site| site.title == title)
    }

    #[must_use]
    pub fn key_for(&self, site: &HeritageSite) -> SiteKey {
        self.key_policy.key_for(site)
    }

    #[must_use]
    pub fn state(&self, site: &HeritageSite) -> InteractionState {
        self.store.get(&self.key_for(site))
    }

    pub fn toggle_favorite(&self, site: &HeritageSite) -> bool {
        self.store.toggle_favorite(&self.key_for(site))
    }

    pub fn toggle_dislike(&self, site: &HeritageSite) -> bool {
        self.store.toggle_dislike(&self.key_for(site))
    }

    pub fn toggle_expanded(&self, site: &HeritageSite) -> bool {
        self.store.toggle_expanded(&self.key_for(site))
    }

    /// Description as currently shown: full when expanded, otherwise cut to
    /// the configured summary length.
    #[must_use]
    pub fn display_description<'s>(&self, site: &'s HeritageSite) -> Cow<'s, str> {
        site.display_description(self.state(site).expanded, self.summary_chars)
    }

    /// Shares `site` through the platform sharer.
    ///
    /// Failures are logged here; callers may ignore the returned error.
    ///
    /// # Errors
    ///
    /// Returns the [`ShareError`] reported by the sharer.
    pub fn share(&self, site: &HeritageSite) -> Result<(), ShareError> {
        let message = share_message(&self.source_url, site);
        self.sharer.share(&message).inspect_err(|e| {
            tracing::error!(title = %site.title, error = %e, "error sharing site");
        })
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Attention> {
        self.store.subscribe()
    }
}
