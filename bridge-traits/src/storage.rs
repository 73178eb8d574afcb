//! Storage and File System Abstractions
//!
//! Provides a platform-agnostic trait for the file I/O the sync pipeline needs
//! outside of the tag codecs: listing the library directory and telling
//! regular files apart from everything else.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File metadata information
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size: u64,
    pub modified_at: Option<i64>,
    pub is_directory: bool,
    /// True for regular files (symlinks are followed)
    pub is_file: bool,
}

/// File system access trait
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::FileSystemAccess;
///
/// async fn count_files(fs: &dyn FileSystemAccess, root: &Path) -> Result<usize> {
///     let mut count = 0;
///     for entry in fs.list_directory(root).await? {
///         if fs.metadata(&entry).await?.is_file {
///             count += 1;
///         }
///     }
///     Ok(count)
/// }
/// ```
#[async_trait]
pub trait FileSystemAccess: Send + Sync {
    /// Get metadata for a file or directory
    async fn metadata(&self, path: &Path) -> Result<FileMetadata>;

    /// List the direct entries of a directory, in the order the OS returns them
    ///
    /// Does not recurse and does not sort.
    async fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>>;
}
