//! Per-File Pipeline
//!
//! Runs one file through read → search → write.
//!
//! ## Workflow
//!
//! 1. Read artist/title (unsupported extensions stop here, skipped)
//! 2. Search lyrics with `"{artist} {title}"` (nothing found stops here, skipped)
//! 3. Embed the lyrics and save the file in place
//!
//! ## Error Handling
//!
//! Every failure is returned as a [`ProcessingError`] tagged with its stage.
//! A failed search never reaches the write step, so the file is untouched.
//! A failed write may leave the file partially modified.

use crate::error::ProcessingError;
use core_metadata::lyrics::{LyricsProvider, LyricsService};
use core_metadata::{tags, TrackIdentity};
use core_runtime::logging::strip_path;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Why a file finished without a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Extension is neither MP3 nor FLAC
    Unsupported,
    /// The search returned nothing usable
    NoLyrics,
}

/// Terminal state of a file that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessedOutcome {
    Written(TrackIdentity),
    Skipped(SkipReason),
}

/// Processes single files; holds no per-file state
pub struct FileProcessor {
    lyrics: LyricsService,
}

impl FileProcessor {
    pub fn new(lyrics: LyricsService) -> Self {
        Self { lyrics }
    }

    /// Convenience constructor wrapping a provider in a [`LyricsService`]
    pub fn with_provider(provider: Arc<dyn LyricsProvider>) -> Self {
        Self::new(LyricsService::new(provider))
    }

    /// Read, search and write one file
    pub async fn process(&self, path: &Path) -> Result<ProcessedOutcome, ProcessingError> {
        let display = path.to_string_lossy();
        let file = strip_path(&display);

        let identity = match tags::read_identity(path).map_err(ProcessingError::Read)? {
            Some(identity) => identity,
            None => return Ok(ProcessedOutcome::Skipped(SkipReason::Unsupported)),
        };

        info!(
            file = %file,
            artist = %identity.artist,
            title = %identity.title,
            "Processing"
        );
        if identity.is_unknown() {
            warn!(file = %file, "No artist or title tags, searching with placeholders");
        }

        let lyrics = match self
            .lyrics
            .fetch_lyrics(&identity)
            .await
            .map_err(ProcessingError::Search)?
        {
            Some(lyrics) => lyrics,
            None => {
                info!(file = %file, "No synced lyrics found for {}", identity);
                return Ok(ProcessedOutcome::Skipped(SkipReason::NoLyrics));
            }
        };

        debug!(file = %file, bytes = lyrics.len(), "Embedding lyrics");
        if !tags::write_lyrics(path, &lyrics).map_err(ProcessingError::Write)? {
            return Ok(ProcessedOutcome::Skipped(SkipReason::Unsupported));
        }

        info!(file = %file, "Synced lyrics added");
        Ok(ProcessedOutcome::Written(identity))
    }
}
