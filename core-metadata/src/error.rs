use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to read tags from {path}: {reason}")]
    ExtractionFailed { path: String, reason: String },

    #[error("Failed to write tags to {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("Lyrics fetch failed: {0}")]
    LyricsFetchFailed(String),

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bridge error: {0}")]
    Bridge(#[from] bridge_traits::error::BridgeError),
}

impl MetadataError {
    pub(crate) fn read(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::ExtractionFailed {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::WriteFailed {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetadataError>;
