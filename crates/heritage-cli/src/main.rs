mod present;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "heritage-cli")]
#[command(about = "Heritage site catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the content source and list its heritage sites
    Sites {
        /// Show full descriptions instead of summaries
        #[arg(long)]
        expand: bool,
        /// Print the sites as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the share message for a site
    Share {
        /// Exact title of the site to share
        #[arg(long)]
        title: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = heritage_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

    let dashboard = present::load_dashboard(&config, &cancel).await?;

    match cli.command {
        Some(Commands::Sites { expand, json }) => present::run_sites(&dashboard, expand, json)?,
        Some(Commands::Share { title }) => present::run_share(&dashboard, &title)?,
        None => present::run_sites(&dashboard, false, false)?,
    }

    Ok(())
}

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!("received ctrl-c, cancelling");
    cancel.cancel();
}

#[cfg(test)]
mod tests;
