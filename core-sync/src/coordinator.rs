//! # Sync Coordinator
//!
//! Walks the root directory and runs each file through the [`FileProcessor`].
//!
//! ## Overview
//!
//! - Lists the direct entries of the configured root via `FileSystemAccess`
//! - Keeps regular files only, in the order the OS returned them
//! - Processes files one at a time; a failing file is logged and counted
//! - Returns a [`BatchSummary`] once every file reached its terminal state
//!
//! The walker does not recurse and does not filter by extension. Unsupported
//! files are skipped by the pipeline.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_sync::{FileProcessor, LyricsSyncCoordinator};
//!
//! let coordinator = LyricsSyncCoordinator::new(config, fs, FileProcessor::new(service));
//! let summary = coordinator.run().await?;
//! println!("{}", summary);
//! ```

use crate::error::{ProcessingError, ProcessingStage, Result, SyncError};
use crate::pipeline::{FileProcessor, ProcessedOutcome};
use bridge_traits::storage::FileSystemAccess;
use core_runtime::config::SyncConfig;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// One failed file in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub stage: ProcessingStage,
    pub error: String,
}

/// Counters for a completed batch
///
/// `discovered == written + skipped + failed` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Regular files found in the root directory
    pub discovered: usize,
    /// Files that gained lyrics
    pub written: usize,
    /// Unsupported files and files without lyrics
    pub skipped: usize,
    /// Files whose read, search or write failed
    ///
    /// A search error (network, HTTP status, bad JSON) lands here rather than
    /// in `skipped`, although the file is left untouched just like a file with
    /// no lyrics. The failure entry carries stage `search` so the two cases
    /// can be told apart.
    pub failed: usize,
    pub failures: Vec<FileFailure>,
}

impl BatchSummary {
    /// Fold one file's result into the counters
    pub fn record(
        &mut self,
        path: &Path,
        result: &std::result::Result<ProcessedOutcome, ProcessingError>,
    ) {
        self.discovered += 1;
        match result {
            Ok(ProcessedOutcome::Written(_)) => self.written += 1,
            Ok(ProcessedOutcome::Skipped(_)) => self.skipped += 1,
            Err(e) => {
                self.failed += 1;
                self.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    stage: e.stage(),
                    error: e.to_string(),
                });
            }
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files: {} written, {} skipped, {} failed",
            self.discovered, self.written, self.skipped, self.failed
        )?;
        for failure in &self.failures {
            write!(
                f,
                "\n  {} ({}): {}",
                failure.path.display(),
                failure.stage,
                failure.error
            )?;
        }
        Ok(())
    }
}

/// Batch driver for one run
pub struct LyricsSyncCoordinator {
    config: SyncConfig,
    file_system: Arc<dyn FileSystemAccess>,
    processor: FileProcessor,
}

impl LyricsSyncCoordinator {
    pub fn new(
        config: SyncConfig,
        file_system: Arc<dyn FileSystemAccess>,
        processor: FileProcessor,
    ) -> Self {
        Self {
            config,
            file_system,
            processor,
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.config.root_dir
    }

    /// List the regular files directly inside the root directory
    ///
    /// # Errors
    ///
    /// Fails only if the root itself cannot be listed. An entry whose metadata
    /// cannot be read is logged and left out.
    pub async fn discover(&self) -> Result<Vec<PathBuf>> {
        let root = self.root_dir();
        let entries = self
            .file_system
            .list_directory(root)
            .await
            .map_err(|source| SyncError::ListDirectory {
                path: root.display().to_string(),
                source,
            })?;

        let mut files = Vec::with_capacity(entries.len());
        for entry in entries {
            match self.file_system.metadata(&entry).await {
                Ok(meta) if meta.is_file => files.push(entry),
                Ok(_) => debug!(entry = %entry.display(), "Skipping non-file entry"),
                Err(e) => warn!(
                    entry = %entry.display(),
                    error = %e,
                    "Failed to stat entry, skipping"
                ),
            }
        }

        Ok(files)
    }

    /// Process every discovered file sequentially
    pub async fn run(&self) -> Result<BatchSummary> {
        info!(root = %self.root_dir().display(), "Scanning directory");
        let files = self.discover().await?;
        info!("Discovered {} files", files.len());

        let mut summary = BatchSummary::default();
        for (index, path) in files.iter().enumerate() {
            debug!(
                "Processing file {}/{}: {}",
                index + 1,
                files.len(),
                path.display()
            );

            let result = self.processor.process(path).await;
            if let Err(e) = &result {
                error!(
                    file = %path.display(),
                    stage = %e.stage(),
                    "Error processing file: {}",
                    e
                );
            }
            summary.record(path, &result);
        }

        info!(
            "Sync complete: {} written, {} skipped, {} failed",
            summary.written, summary.skipped, summary.failed
        );

        Ok(summary)
    }
}
