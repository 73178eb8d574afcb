//! lyricsync - embed synchronized lyrics into a directory of MP3 and FLAC files
//!
//! Exit status is non-zero only when the run cannot start (bad configuration,
//! logging setup, unlistable directory). Per-file failures are reported in the
//! summary and still exit with 0.

mod cli;

use anyhow::{Context, Result};
use bridge_desktop::{ReqwestHttpClient, TokioFileSystem};
use bridge_traits::http::RetryPolicy;
use clap::Parser;
use core_metadata::LrcLibProvider;
use core_runtime::{init_logging, SyncConfig};
use core_sync::{BatchSummary, FileProcessor, LyricsSyncCoordinator};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    init_logging(args.logging_config()).context("Failed to initialize logging")?;
    let config = args.sync_config().context("Invalid configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        endpoint = %config.lyrics_endpoint,
        "Starting lyricsync"
    );

    let summary = run(config).await?;
    if summary.has_failures() {
        warn!(failed = summary.failed, "Some files could not be processed");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }

    Ok(())
}

async fn run(config: SyncConfig) -> Result<BatchSummary> {
    let http_client = ReqwestHttpClient::with_timeout(config.request_timeout, &config.user_agent)
        .context("Failed to create HTTP client")?
        .with_retry_policy(RetryPolicy::with_max_attempts(config.max_attempts));

    let provider = LrcLibProvider::new(Arc::new(http_client), config.lyrics_endpoint.clone());
    let processor = FileProcessor::with_provider(Arc::new(provider));

    let coordinator =
        LyricsSyncCoordinator::new(config, Arc::new(TokioFileSystem::new()), processor);

    coordinator.run().await.context("Sync run failed")
}
