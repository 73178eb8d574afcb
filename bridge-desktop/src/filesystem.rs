//! File System Access Implementation using Tokio

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    storage::{FileMetadata, FileSystemAccess},
};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Tokio-based file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    pub fn new() -> Self {
        Self
    }

    fn map_io_error(e: std::io::Error) -> BridgeError {
        BridgeError::Io(e)
    }
}

#[async_trait]
impl FileSystemAccess for TokioFileSystem {
    async fn metadata(&self, path: &Path) -> Result<FileMetadata> {
        let metadata = fs::metadata(path).await.map_err(Self::map_io_error)?;

        Ok(FileMetadata {
            size: metadata.len(),
            modified_at: metadata
                .modified()
                .ok()
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .map(|d| d.as_secs() as i64),
            is_directory: metadata.is_dir(),
            is_file: metadata.is_file(),
        })
    }

    async fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        let mut read_dir = fs::read_dir(path).await.map_err(Self::map_io_error)?;

        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(Self::map_io_error)?
        {
            entries.push(entry.path());
        }

        debug!(path = ?path, count = entries.len(), "Listed directory");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_directory_is_flat() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.mp3"), b"a").unwrap();
        std::fs::write(dir.path().join("b.flac"), b"b").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.mp3"), b"c").unwrap();

        let fs = TokioFileSystem::new();
        let mut entries = fs.list_directory(dir.path()).await.unwrap();
        entries.sort();

        assert_eq!(
            entries,
            vec![
                dir.path().join("a.mp3"),
                dir.path().join("b.flac"),
                dir.path().join("nested"),
            ]
        );
    }

    #[tokio::test]
    async fn test_metadata_distinguishes_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("song.mp3");
        std::fs::write(&file, b"12345").unwrap();

        let fs = TokioFileSystem::new();
        let file_meta = fs.metadata(&file).await.unwrap();
        assert!(file_meta.is_file);
        assert!(!file_meta.is_directory);
        assert_eq!(file_meta.size, 5);

        let dir_meta = fs.metadata(dir.path()).await.unwrap();
        assert!(dir_meta.is_directory);
        assert!(!dir_meta.is_file);
    }

    #[tokio::test]
    async fn test_metadata_of_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = TokioFileSystem::new();
        let result = fs.metadata(&dir.path().join("gone.mp3")).await;
        assert!(matches!(result, Err(BridgeError::Io(_))));
    }

    #[tokio::test]
    async fn test_list_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = TokioFileSystem::new();
        let result = fs.list_directory(&dir.path().join("missing")).await;
        assert!(matches!(result, Err(BridgeError::Io(_))));
    }
}
