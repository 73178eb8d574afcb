//! Tag codecs
//!
//! One [`TagCodec`] per supported container. Both codecs expose the same
//! capability set, but their write semantics differ:
//!
//! | Codec | Field | Second write |
//! |-------|-------|--------------|
//! | [`Id3Codec`] | USLT frame, `eng` / `Lyrics` | adds another frame |
//! | [`VorbisCodec`] | `LYRICS` comment | replaces the value |
//!
//! The path-based helpers [`read_identity`] and [`write_lyrics`] dispatch on
//! the extension and treat unsupported files as a no-op.

mod flac;
mod mp3;

pub use flac::VorbisCodec;
pub use mp3::Id3Codec;

use std::path::Path;
use tracing::{debug, warn};

use crate::error::{MetadataError, Result};
use crate::format::AudioFile;
use crate::identity::TrackIdentity;

/// Language code of the lyrics frame written to MP3 files
pub const LYRICS_LANGUAGE: &str = "eng";

/// Description of the lyrics frame written to MP3 files
pub const LYRICS_DESCRIPTION: &str = "Lyrics";

/// Read and write access to one container's metadata block
///
/// Implementations open the file for each call and hold nothing between calls.
pub trait TagCodec: Send + Sync {
    /// Extract artist and title
    ///
    /// A container without a tag block is not an error: both fields take
    /// their placeholders.
    fn read_identity(&self, path: &Path) -> Result<TrackIdentity>;

    /// Store `lyrics` in the container's lyrics field and save in place
    fn write_lyrics(&self, path: &Path, lyrics: &str) -> Result<()>;

    /// All lyrics values currently stored, in tag order
    fn read_lyrics(&self, path: &Path) -> Result<Vec<String>>;
}

/// Read the identity of any file
///
/// Returns `Ok(None)` and logs a warning when the extension is not supported.
pub fn read_identity(path: &Path) -> Result<Option<TrackIdentity>> {
    match AudioFile::from_path(path) {
        Some(file) => {
            let identity = file.read_identity()?;
            debug!(
                file = %path.display(),
                artist = %identity.artist,
                title = %identity.title,
                "Read track identity"
            );
            Ok(Some(identity))
        }
        None => {
            warn!(file = %path.display(), "Unsupported format, no identity read");
            Ok(None)
        }
    }
}

/// Write lyrics into any file
///
/// Returns `Ok(true)` when the file was updated and `Ok(false)` when the
/// extension is unsupported, in which case the file is left untouched.
///
/// # Errors
///
/// Empty lyrics are rejected with [`MetadataError::InvalidMetadata`].
pub fn write_lyrics(path: &Path, lyrics: &str) -> Result<bool> {
    if lyrics.is_empty() {
        return Err(MetadataError::InvalidMetadata(format!(
            "Refusing to write empty lyrics to {}",
            path.display()
        )));
    }

    match AudioFile::from_path(path) {
        Some(file) => {
            file.write_lyrics(lyrics)?;
            debug!(file = %path.display(), format = %file.format(), "Wrote lyrics");
            Ok(true)
        }
        None => {
            warn!(file = %path.display(), "Unsupported format, lyrics not written");
            Ok(false)
        }
    }
}
