//! Container type dispatch
//!
//! The container kind is decided by the file extension alone, compared
//! case-insensitively. Content is not sniffed: a `.mp3` that holds FLAC data
//! goes to the ID3 codec and fails there.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{MetadataError, Result};
use crate::identity::TrackIdentity;
use crate::tags::{self, TagCodec};

/// Supported audio containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    /// MPEG audio with an ID3v2 tag
    Mp3,
    /// FLAC with a Vorbis comment block
    Flac,
}

impl AudioFormat {
    /// Map a file extension (without the dot) to a format
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }

    /// Derive the format from the path's extension
    ///
    /// Returns `None` for unsupported or missing extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
        }
    }

    /// Tag codec responsible for this container
    pub fn codec(&self) -> &'static dyn TagCodec {
        match self {
            Self::Mp3 => &tags::Id3Codec,
            Self::Flac => &tags::VorbisCodec,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path on disk whose extension names a supported container
///
/// Holds no open handle; every operation re-opens the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    path: PathBuf,
    format: AudioFormat,
}

impl AudioFile {
    /// Returns `None` when the extension is not a supported container
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let format = AudioFormat::from_path(&path)?;
        Some(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Read artist and title, falling back to placeholders for missing fields
    pub fn read_identity(&self) -> Result<TrackIdentity> {
        self.format.codec().read_identity(&self.path)
    }

    /// Embed `lyrics` into the file's tag and save it in place
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidMetadata`] for empty lyrics without
    /// touching the file, or a codec error if the tag cannot be loaded or saved.
    pub fn write_lyrics(&self, lyrics: &str) -> Result<()> {
        if lyrics.is_empty() {
            return Err(MetadataError::InvalidMetadata(format!(
                "Refusing to write empty lyrics to {}",
                self.path.display()
            )));
        }
        self.format.codec().write_lyrics(&self.path, lyrics)
    }

    /// Lyrics currently stored in the file's tag, in tag order
    pub fn read_lyrics(&self) -> Result<Vec<String>> {
        self.format.codec().read_lyrics(&self.path)
    }
}
