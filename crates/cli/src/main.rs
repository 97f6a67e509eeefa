mod commands;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tmdbfin_metadata::catalog::CatalogClient;
use tmdbfin_metadata::tmdb::{TmdbClient, TmdbConfig};
use tmdbfin_metadata::{
    BoxSetProvider, EpisodeImageProvider, EpisodeProvider, MetadataError, ProviderOptions,
    RemoteImageProvider, RemoteMetadataProvider, SeriesImageProvider,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{BoxSetAction, Command, EpisodeAction};

/// Query TMDB the way a library scan would.
#[derive(Debug, Parser)]
#[command(name = "tmdbfin", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = TmdbConfig::from_env().context("failed to load TMDB configuration")?;
    let client: Arc<dyn CatalogClient> =
        Arc::new(TmdbClient::new(config).context("failed to build TMDB client")?);
    let options = ProviderOptions::from_env();
    info!(language = %options.default_language, "providers configured");

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received, cancelling");
                cancel.cancel();
            }
        });
    }

    match run(cli.command, client, options, &cancel).await {
        Err(e) if e.is_cancelled() => {
            warn!("lookup cancelled");
            std::process::exit(130);
        }
        Err(e) => {
            warn!(error = %e, "lookup failed");
            Err(e.into())
        }
        Ok(()) => Ok(()),
    }
}

async fn run(
    command: Command,
    client: Arc<dyn CatalogClient>,
    options: ProviderOptions,
    cancel: &CancellationToken,
) -> Result<(), MetadataError> {
    match command {
        Command::BoxSet { action } => {
            let provider = BoxSetProvider::new(client, options);
            match action {
                BoxSetAction::Search(args) => {
                    print(&provider.search(&args.to_query(), cancel).await?)
                }
                BoxSetAction::Fetch(args) => {
                    print(&provider.fetch(&args.to_query(), cancel).await?)
                }
            }
        }
        Command::Episode { action } => {
            let provider = EpisodeProvider::new(client, options);
            match action {
                EpisodeAction::Search(args) => {
                    print(&provider.search(&args.to_query(), cancel).await?)
                }
                EpisodeAction::Fetch(args) => {
                    print(&provider.fetch(&args.to_query(), cancel).await?)
                }
            }
        }
        Command::SeriesImages(args) => {
            let provider = SeriesImageProvider::new(client, options);
            print(&provider.images(&args.to_item(), cancel).await?)
        }
        Command::EpisodeImages(args) => {
            let provider = EpisodeImageProvider::new(client, options);
            print(&provider.images(&args.to_item(), cancel).await?)
        }
    }
}

fn print<T: Serialize>(value: &T) -> Result<(), MetadataError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| MetadataError::Provider(format!("serialize output: {e}")))?;
    println!("{json}");
    Ok(())
}
