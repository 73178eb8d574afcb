//! # Sync Module
//!
//! Drives one lyrics sync run over a directory.
//!
//! ## Overview
//!
//! This module manages the batch lifecycle:
//! - Listing the root directory via `FileSystemAccess`
//! - Running every regular file through the per-file pipeline
//! - Isolating per-file failures and folding them into a summary
//!
//! ## Components
//!
//! - **File Processor** (`pipeline`): read identity, search lyrics, write lyrics
//! - **Sync Coordinator** (`coordinator`): directory walk and batch accounting

pub mod coordinator;
pub mod error;
pub mod pipeline;

pub use coordinator::{BatchSummary, FileFailure, LyricsSyncCoordinator};
pub use error::{ProcessingError, ProcessingStage, Result, SyncError};
pub use pipeline::{FileProcessor, ProcessedOutcome, SkipReason};
