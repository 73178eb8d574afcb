//! # Sync Configuration
//!
//! Provides configuration for a lyricsync run.
//!
//! ## Overview
//!
//! The configuration uses a builder pattern to construct a [`SyncConfig`]
//! holding the library root and the lyrics search settings. Validation is
//! fail-fast: [`SyncConfigBuilder::build`] refuses to produce a config that the
//! pipeline could not run with.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::SyncConfig;
//! use std::time::Duration;
//!
//! let config = SyncConfig::builder()
//!     .root_dir("/home/me/Music")
//!     .request_timeout(Duration::from_secs(10))
//!     .build()?;
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::SyncConfig;
//!
//! // Fails: the root directory is required
//! let config = SyncConfig::builder()
//!     .build()
//!     .expect("Should fail - missing root directory");
//! ```

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Default LRCLIB API base URL
pub const DEFAULT_LYRICS_ENDPOINT: &str = "https://lrclib.net/api";

/// Default overall timeout for one search request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound accepted for `request_timeout`
pub const MAX_REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// Default HTTP attempt budget, the first attempt included
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Upper bound accepted for `max_attempts`
pub const MAX_ATTEMPTS_LIMIT: u32 = 10;

/// User agent sent to the lyrics service unless overridden
pub fn default_user_agent() -> String {
    format!("lyricsync/{}", env!("CARGO_PKG_VERSION"))
}

/// Configuration for one batch run.
///
/// Use [`SyncConfigBuilder`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Directory whose direct entries are scanned
    pub root_dir: PathBuf,

    /// Base URL of the LRCLIB-compatible search API
    pub lyrics_endpoint: String,

    /// Overall timeout applied to every search request
    pub request_timeout: Duration,

    /// User agent sent with search requests
    pub user_agent: String,

    /// HTTP attempts per search, the first one included
    pub max_attempts: u32,
}

impl SyncConfig {
    /// Create a new configuration builder.
    pub fn builder() -> SyncConfigBuilder {
        SyncConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.root_dir.as_os_str().is_empty() {
            return Err(Error::Config("Root directory cannot be empty".to_string()));
        }

        let endpoint = self.lyrics_endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(Error::Config(format!(
                "Lyrics endpoint must be an http:// or https:// URL, got '{}'",
                self.lyrics_endpoint
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(Error::Config(
                "Request timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.request_timeout > MAX_REQUEST_TIMEOUT {
            return Err(Error::Config(
                "Request timeout exceeds maximum of 10 minutes (600 s)".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(Error::Config("User agent cannot be empty".to_string()));
        }

        if self.max_attempts == 0 || self.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(Error::Config(format!(
                "Max attempts must be between 1 and {}, got {}",
                MAX_ATTEMPTS_LIMIT, self.max_attempts
            )));
        }

        Ok(())
    }
}

/// Builder for [`SyncConfig`].
///
/// Unset optional fields fall back to their defaults at [`build`](Self::build).
#[derive(Debug, Default)]
pub struct SyncConfigBuilder {
    root_dir: Option<PathBuf>,
    lyrics_endpoint: Option<String>,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
    max_attempts: Option<u32>,
}

impl SyncConfigBuilder {
    /// Set the directory to scan (required).
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(path.into());
        self
    }

    /// Set the lyrics search API base URL.
    ///
    /// A trailing `/` is dropped so that paths can be appended directly.
    pub fn lyrics_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.lyrics_endpoint = Some(endpoint.trim_end_matches('/').to_string());
        self
    }

    /// Set the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the user agent sent with search requests.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the HTTP attempt budget per search.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory is missing or any field fails
    /// [`SyncConfig::validate`].
    pub fn build(self) -> Result<SyncConfig> {
        let root_dir = self.root_dir.ok_or_else(|| {
            Error::Config(
                "Root directory is required. Pass DIR or set LYRICSYNC_DIR.".to_string(),
            )
        })?;

        let config = SyncConfig {
            root_dir,
            lyrics_endpoint: self
                .lyrics_endpoint
                .unwrap_or_else(|| DEFAULT_LYRICS_ENDPOINT.to_string()),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
        };

        config.validate()?;

        Ok(config)
    }
}
