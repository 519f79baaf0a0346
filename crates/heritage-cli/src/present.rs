//! Terminal presenter for the heritage site list.
//!
//! Plays the role a mobile screen would: loads the dashboard once, renders
//! each site with its interaction state, and routes share requests to stdout.

use std::io::Write;

use anyhow::Context;
use heritage_core::AppConfig;
use heritage_dashboard::{Dashboard, LoadState, ShareError, Sharer};
use heritage_scraper::{ExtractorConfig, PageClient, RecordExtractor, SitePipeline};
use tokio_util::sync::CancellationToken;

/// Writes share messages to stdout.
pub(crate) struct StdoutSharer;

impl Sharer for StdoutSharer {
    fn share(&self, message: &str) -> Result<(), ShareError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{message}").map_err(|e| ShareError::Platform(e.to_string()))
    }
}

/// Fetch the content source and return a dashboard holding its sites.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the fetch fails, or
/// the load is cancelled. An empty site list is not an error.
pub(crate) async fn load_dashboard(
    config: &AppConfig,
    cancel: &CancellationToken,
) -> anyhow::Result<Dashboard> {
    let client = PageClient::from_app_config(config).context("failed to build page client")?;
    let extractor = RecordExtractor::new(&ExtractorConfig::from_app_config(config));
    let pipeline = SitePipeline::new(client, extractor, config.source_url.clone());

    let mut dashboard = Dashboard::from_app_config(config, Box::new(StdoutSharer));
    dashboard.load(&pipeline, cancel).await;

    match dashboard.load_state() {
        LoadState::Ready(_) => {}
        LoadState::Failed(e) => anyhow::bail!("error fetching data: {e}"),
        LoadState::Loading => anyhow::bail!("load cancelled"),
    }

    Ok(dashboard)
}

/// Print every loaded site, or a notice when there are none.
///
/// With `expand`, every site is switched to its full description first.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing to stdout fails.
pub(crate) fn run_sites(dashboard: &Dashboard, expand: bool, json: bool) -> anyhow::Result<()> {
    let sites = dashboard.sites();

    if expand {
        for site in sites {
            if !dashboard.state(site).expanded {
                dashboard.toggle_expanded(site);
            }
        }
    }

    let mut out = std::io::stdout().lock();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(sites)?)?;
        return Ok(());
    }

    if sites.is_empty() {
        writeln!(out, "No heritage sites found.")?;
        return Ok(());
    }

    for site in sites {
        let state = dashboard.state(site);
        writeln!(out, "{}. {}", site.position + 1, site.title)?;
        if site.has_image() {
            writeln!(out, "   image: {}", site.image)?;
        }
        writeln!(out, "   {}", dashboard.display_description(site))?;
        writeln!(out, "   [{}]", state.expand_label())?;
        writeln!(out)?;
    }

    Ok(())
}

/// Share the first loaded site titled `title`.
///
/// A failed share is logged by the dashboard and does not fail the command.
///
/// # Errors
///
/// Returns an error if no loaded site has that title.
pub(crate) fn run_share(dashboard: &Dashboard, title: &str) -> anyhow::Result<()> {
    let site = dashboard
        .find_by_title(title)
        .ok_or_else(|| anyhow::anyhow!("site '{title}' not found"))?;

    if dashboard.share(site).is_err() {
        eprintln!("warning: could not share '{title}'");
    }

    Ok(())
}
