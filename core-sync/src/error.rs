use bridge_traits::error::BridgeError;
use core_metadata::MetadataError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that abort a whole run
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to list directory {path}: {source}")]
    ListDirectory {
        path: String,
        #[source]
        source: BridgeError,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;

/// Pipeline step at which a file failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStage {
    Read,
    Search,
    Write,
}

impl fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Search => "search",
            Self::Write => "write",
        })
    }
}

/// A single file's failure; never stops the batch
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Failed to read metadata: {0}")]
    Read(#[source] MetadataError),

    #[error("Lyrics search failed: {0}")]
    Search(#[source] MetadataError),

    #[error("Failed to write lyrics: {0}")]
    Write(#[source] MetadataError),
}

impl ProcessingError {
    pub fn stage(&self) -> ProcessingStage {
        match self {
            Self::Read(_) => ProcessingStage::Read,
            Self::Search(_) => ProcessingStage::Search,
            Self::Write(_) => ProcessingStage::Write,
        }
    }
}
