//! Command line arguments

use clap::Parser;
use core_runtime::config::{
    default_user_agent, SyncConfig, DEFAULT_LYRICS_ENDPOINT, DEFAULT_MAX_ATTEMPTS,
};
use core_runtime::logging::{LogFormat, LogLevel, LoggingConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "lyricsync", version)]
#[command(about = "Embed synchronized (LRC) lyrics into the MP3 and FLAC files of a directory")]
pub struct Args {
    /// Directory to scan (direct entries only, no recursion)
    #[arg(env = "LYRICSYNC_DIR")]
    pub dir: PathBuf,

    /// Base URL of the LRCLIB-compatible search API
    #[arg(long, env = "LYRICSYNC_ENDPOINT", default_value = DEFAULT_LYRICS_ENDPOINT)]
    pub endpoint: String,

    /// Timeout for each search request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// User agent sent to the lyrics service
    #[arg(long)]
    pub user_agent: Option<String>,

    /// HTTP attempts per search, the first one included
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Minimum log level: trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Log output: pretty, compact or json
    #[arg(long, default_value = "compact")]
    pub log_format: LogFormat,

    /// Full tracing filter, overrides --log-level (e.g. "core_sync=debug")
    #[arg(long, env = "LYRICSYNC_LOG")]
    pub log_filter: Option<String>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn logging_config(&self) -> LoggingConfig {
        let config = LoggingConfig::default()
            .with_format(self.log_format)
            .with_level(self.log_level);
        match &self.log_filter {
            Some(filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }

    pub fn sync_config(&self) -> core_runtime::Result<SyncConfig> {
        SyncConfig::builder()
            .root_dir(&self.dir)
            .lyrics_endpoint(&self.endpoint)
            .request_timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(self.user_agent.clone().unwrap_or_else(default_user_agent))
            .max_attempts(self.max_attempts)
            .build()
    }
}
