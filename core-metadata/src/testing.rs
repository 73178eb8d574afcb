//! Fixture builders for tests
//!
//! Produces the smallest files the tag codecs accept, so tests do not need
//! real audio assets checked into the repository.
//!
//! ```ignore
//! use core_metadata::testing;
//!
//! testing::write_mp3(&dir.join("a.mp3"), Some("X"), Some("Y"))?;
//! testing::write_flac(&dir.join("b.flac"), None, None)?;
//! ```

use id3::{TagLike, Version};
use lofty::config::WriteOptions;
use lofty::tag::{Accessor, Tag, TagExt, TagType};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::error::{MetadataError, Result};

/// One silent MPEG-1 Layer III frame header followed by zero padding
pub fn mp3_stub_bytes() -> Vec<u8> {
    // 128 kbit/s, 44.1 kHz frame: 417 bytes
    let mut bytes = vec![0xFF, 0xFB, 0x90, 0x00];
    bytes.resize(417, 0);
    bytes
}

/// `fLaC` marker, STREAMINFO and a trailing 512-byte PADDING block
///
/// This is the layout encoders produce, with room for a comment block.
pub fn flac_stub_bytes() -> Vec<u8> {
    let mut bytes = b"fLaC".to_vec();
    bytes.extend(streaminfo_block(false));
    // Last-metadata-block flag, type 1 (PADDING), length 512
    bytes.extend_from_slice(&[0x81, 0x00, 0x02, 0x00]);
    bytes.resize(bytes.len() + 512, 0);
    bytes
}

/// `fLaC` marker plus a lone STREAMINFO block and nothing else
pub fn bare_flac_stub_bytes() -> Vec<u8> {
    let mut bytes = b"fLaC".to_vec();
    bytes.extend(streaminfo_block(true));
    bytes
}

/// STREAMINFO for 44.1 kHz, stereo, 16-bit audio with no frames
fn streaminfo_block(last: bool) -> Vec<u8> {
    // Type 0 (STREAMINFO), length 34
    let mut block = vec![if last { 0x80 } else { 0x00 }, 0x00, 0x00, 0x22];
    // Min and max block size: 4096
    block.extend_from_slice(&[0x10, 0x00, 0x10, 0x00]);
    // Min and max frame size: unknown
    block.extend_from_slice(&[0x00; 6]);
    // Sample rate, channels, bits per sample, total samples
    block.extend_from_slice(&[0x0A, 0xC4, 0x42, 0xF0, 0x00, 0x00, 0x00, 0x00]);
    // MD5 of the (empty) audio
    block.extend_from_slice(&[0x00; 16]);
    block
}

/// Write an MP3 stub, with an ID3v2.4 tag when artist or title is given
pub fn write_mp3(path: &Path, artist: Option<&str>, title: Option<&str>) -> Result<()> {
    std::fs::write(path, mp3_stub_bytes())?;

    if artist.is_none() && title.is_none() {
        return Ok(());
    }

    let mut tag = id3::Tag::new();
    if let Some(artist) = artist {
        tag.set_artist(artist);
    }
    if let Some(title) = title {
        tag.set_title(title);
    }
    tag.write_to_path(path, Version::Id3v24)
        .map_err(|e| MetadataError::write(path, e))
}

/// Write a FLAC stub, with a Vorbis comment block when artist or title is given
pub fn write_flac(path: &Path, artist: Option<&str>, title: Option<&str>) -> Result<()> {
    std::fs::write(path, flac_stub_bytes())?;

    if artist.is_none() && title.is_none() {
        return Ok(());
    }

    let mut tag = Tag::new(TagType::VorbisComments);
    if let Some(artist) = artist {
        tag.set_artist(artist.to_string());
    }
    if let Some(title) = title {
        tag.set_title(title.to_string());
    }
    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| MetadataError::write(path, e))
}

/// Number of USLT frame identifiers present in the raw file bytes
///
/// Counts on-disk frames directly, independent of how a tag reader merges
/// duplicate frames.
pub fn count_uslt_frames(path: &Path) -> Result<usize> {
    let bytes = std::fs::read(path)?;
    Ok(bytes.windows(4).filter(|w| *w == b"USLT").count())
}

/// Hex SHA-256 of the file contents
pub fn file_sha256(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}
