//! # Lyrics Provider Module
//!
//! Searches external services for synchronized (LRC format) lyrics.
//!
//! ## Features
//!
//! - Pluggable [`LyricsProvider`] trait taking a free-text query
//! - LRCLIB provider over the [`HttpClient`] bridge
//! - Only synchronized results are accepted; plain text is ignored
//!
//! Retries and timeouts belong to the HTTP bridge. Results are not cached, so
//! the same artist/title pair is queried again on every run.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_metadata::lyrics::{LrcLibProvider, LyricsService};
//!
//! let provider = LrcLibProvider::new(http_client, "https://lrclib.net/api");
//! let service = LyricsService::new(Arc::new(provider));
//!
//! if let Some(lrc) = service.fetch_lyrics(&identity).await? {
//!     println!("{} bytes of LRC", lrc.len());
//! }
//! ```

use crate::error::{MetadataError, Result};
use crate::identity::TrackIdentity;
use async_trait::async_trait;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

// =============================================================================
// Provider Trait
// =============================================================================

/// External lyrics search capability
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Search synchronized lyrics for a free-text query
    ///
    /// # Returns
    /// * `Ok(Some(lrc))` if a synchronized result was found
    /// * `Ok(None)` if nothing matched
    /// * `Err` on API error or network failure
    async fn search(&self, query: &str) -> Result<Option<String>>;

    /// Short provider name for logs
    fn name(&self) -> &'static str;
}

// =============================================================================
// Lyrics Service
// =============================================================================

/// Turns a [`TrackIdentity`] into a lyrics search
pub struct LyricsService {
    provider: Arc<dyn LyricsProvider>,
}

impl LyricsService {
    pub fn new(provider: Arc<dyn LyricsProvider>) -> Self {
        Self { provider }
    }

    /// Fetch synchronized lyrics for a track
    ///
    /// The query is `"{artist} {title}"`. A blank result counts as not found.
    ///
    /// # Errors
    ///
    /// Provider errors are logged and returned unchanged; the caller decides
    /// how to account for them.
    pub async fn fetch_lyrics(&self, identity: &TrackIdentity) -> Result<Option<String>> {
        let query = identity.search_query();
        debug!(
            source = self.provider.name(),
            query = %query,
            "Searching lyrics"
        );

        match self.provider.search(&query).await {
            Ok(Some(lyrics)) if !lyrics.trim().is_empty() => {
                info!(
                    source = self.provider.name(),
                    artist = %identity.artist,
                    title = %identity.title,
                    "Found synced lyrics"
                );
                Ok(Some(lyrics))
            }
            Ok(_) => {
                debug!(source = self.provider.name(), query = %query, "Empty search result");
                Ok(None)
            }
            Err(e) => {
                warn!(
                    source = self.provider.name(),
                    query = %query,
                    error = %e,
                    "Lyrics search failed"
                );
                Err(e)
            }
        }
    }
}

// =============================================================================
// LRCLIB Provider
// =============================================================================

/// LRCLIB search API - free, open-source synced lyrics
pub struct LrcLibProvider {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
}

impl LrcLibProvider {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/search?q={}", self.base_url, urlencoding::encode(query))
    }
}

#[async_trait]
impl LyricsProvider for LrcLibProvider {
    async fn search(&self, query: &str) -> Result<Option<String>> {
        let request = HttpRequest::new(HttpMethod::Get, self.search_url(query))
            .header("Accept", "application/json");
        let response = self.http_client.execute(request).await?;

        if response.status == 404 {
            return Ok(None);
        }

        if !response.is_success() {
            return Err(MetadataError::LyricsFetchFailed(format!(
                "LRCLib API error: HTTP {}",
                response.status
            )));
        }

        let records: Vec<LrcLibRecord> = response
            .json()
            .map_err(|e| MetadataError::LyricsFetchFailed(format!("Parse error: {}", e)))?;

        debug!(candidates = records.len(), "LRCLib search results");

        Ok(records
            .into_iter()
            .filter_map(|record| record.synced_lyrics)
            .find(|lyrics| is_synced_lrc(lyrics)))
    }

    fn name(&self) -> &'static str {
        "lrclib"
    }
}

#[derive(Debug, Deserialize)]
struct LrcLibRecord {
    #[serde(rename = "syncedLyrics")]
    synced_lyrics: Option<String>,
}

/// Whether `text` carries at least one `[mm:ss` timestamp tag
pub fn is_synced_lrc(text: &str) -> bool {
    text.match_indices('[').any(|(start, _)| {
        let rest = &text.as_bytes()[start + 1..];
        let minutes = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        (1..=3).contains(&minutes)
            && rest.get(minutes) == Some(&b':')
            && rest.len() >= minutes + 3
            && rest[minutes + 1..minutes + 3]
                .iter()
                .all(|b| b.is_ascii_digit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::BridgeError;
    use bridge_traits::http::HttpResponse;
    use bytes::Bytes;
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        pub Http {}

        #[async_trait::async_trait]
        impl HttpClient for Http {
            async fn execute(&self, request: HttpRequest) -> bridge_traits::error::Result<HttpResponse>;
        }
    }

    mock! {
        pub Provider {}

        #[async_trait::async_trait]
        impl LyricsProvider for Provider {
            async fn search(&self, query: &str) -> Result<Option<String>>;
            fn name(&self) -> &'static str;
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: HashMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    fn provider_returning(status: u16, body: &'static str) -> LrcLibProvider {
        let mut http = MockHttp::new();
        http.expect_execute()
            .times(1)
            .returning(move |_| Ok(response(status, body)));
        LrcLibProvider::new(Arc::new(http), "https://lrclib.net/api")
    }

    #[test]
    fn test_is_synced_lrc() {
        assert!(is_synced_lrc("[00:12.50]Hello"));
        assert!(is_synced_lrc("[ar:ABBA]\n[01:02.00]line"));
        assert!(is_synced_lrc("[123:45]long song"));
        assert!(!is_synced_lrc("Plain lyrics\nwithout timing"));
        assert!(!is_synced_lrc("[ar:ABBA]"));
        assert!(!is_synced_lrc("[00:1"));
        assert!(!is_synced_lrc(""));
    }

    #[tokio::test]
    async fn test_search_builds_encoded_url() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .withf(|req| {
                req.method == HttpMethod::Get
                    && req.url == "http://localhost/api/search?q=AC%2FDC%20T.N.T."
            })
            .times(1)
            .returning(|_| Ok(response(200, "[]")));

        let provider = LrcLibProvider::new(Arc::new(http), "http://localhost/api/");
        let result = provider.search("AC/DC T.N.T.").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_search_picks_first_synced_record() {
        let provider = provider_returning(
            200,
            r#"[
                {"id": 1, "plainLyrics": "no timing", "syncedLyrics": null},
                {"id": 2, "syncedLyrics": "not really synced"},
                {"id": 3, "syncedLyrics": "[00:01.00]first"},
                {"id": 4, "syncedLyrics": "[00:01.00]second"}
            ]"#,
        );

        let result = provider.search("X Y").await.unwrap();
        assert_eq!(result.as_deref(), Some("[00:01.00]first"));
    }

    #[tokio::test]
    async fn test_search_ignores_plain_only_results() {
        let provider = provider_returning(
            200,
            r#"[{"plainLyrics": "words", "syncedLyrics": ""}]"#,
        );

        assert!(provider.search("X Y").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_not_found() {
        let provider = provider_returning(404, "");
        assert!(provider.search("X Y").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let provider = provider_returning(500, "oops");
        let err = provider.search("X Y").await.unwrap_err();
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[tokio::test]
    async fn test_search_invalid_json() {
        let provider = provider_returning(200, "<html>");
        let err = provider.search("X Y").await.unwrap_err();
        assert!(matches!(err, MetadataError::LyricsFetchFailed(_)));
    }

    #[tokio::test]
    async fn test_search_transport_error() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .returning(|req| Err(BridgeError::Timeout(req.url)));

        let provider = LrcLibProvider::new(Arc::new(http), "https://lrclib.net/api");
        let err = provider.search("X Y").await.unwrap_err();
        assert!(matches!(err, MetadataError::Bridge(BridgeError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_service_uses_artist_title_query() {
        let mut provider = MockProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_search()
            .withf(|q| q == "X Y")
            .times(1)
            .returning(|_| Ok(Some("[00:01.00]LRC-A".to_string())));

        let service = LyricsService::new(Arc::new(provider));
        let lyrics = service
            .fetch_lyrics(&TrackIdentity::new("X", "Y"))
            .await
            .unwrap();
        assert_eq!(lyrics.as_deref(), Some("[00:01.00]LRC-A"));
    }

    #[tokio::test]
    async fn test_service_blank_result_is_none() {
        let mut provider = MockProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_search()
            .returning(|_| Ok(Some("  \n".to_string())));

        let service = LyricsService::new(Arc::new(provider));
        let lyrics = service
            .fetch_lyrics(&TrackIdentity::unknown())
            .await
            .unwrap();
        assert!(lyrics.is_none());
    }

    #[tokio::test]
    async fn test_service_propagates_provider_error() {
        let mut provider = MockProvider::new();
        provider.expect_name().return_const("mock");
        provider.expect_search().returning(|_| {
            Err(MetadataError::LyricsFetchFailed("rate limited".to_string()))
        });

        let service = LyricsService::new(Arc::new(provider));
        let result = service.fetch_lyrics(&TrackIdentity::new("X", "Y")).await;
        assert!(matches!(result, Err(MetadataError::LyricsFetchFailed(_))));
    }
}
