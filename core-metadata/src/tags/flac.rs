//! Vorbis comment codec for FLAC files

use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag, TagExt, TagType};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

use super::TagCodec;
use crate::error::{MetadataError, Result};
use crate::identity::TrackIdentity;

const BLOCK_HEADER_LEN: usize = 4;
const BLOCK_TYPE_PADDING: u8 = 1;
const LAST_BLOCK_FLAG: u8 = 0x80;

/// Size of the PADDING block added to streams that do not end with one
const TRAILING_PADDING: u32 = 1024;

/// Reads artist/title from and sets the `LYRICS` field of Vorbis comments
#[derive(Debug, Default, Clone, Copy)]
pub struct VorbisCodec;

impl VorbisCodec {
    /// Load the Vorbis comment block, `None` if the stream has none
    fn load(path: &Path) -> Result<Option<Tag>> {
        let tagged_file = Probe::open(path)
            .map_err(|e| MetadataError::read(path, e))?
            .options(ParseOptions::new().read_properties(false))
            .read()
            .map_err(|e| MetadataError::read(path, e))?;

        let tag = tagged_file.tag(TagType::VorbisComments).cloned();
        if tag.is_none() {
            debug!(file = %path.display(), "No Vorbis comment block");
        }
        Ok(tag)
    }
}

impl TagCodec for VorbisCodec {
    fn read_identity(&self, path: &Path) -> Result<TrackIdentity> {
        Ok(match Self::load(path)? {
            Some(tag) => TrackIdentity::from_tags(
                tag.artist().map(|s| s.into_owned()),
                tag.title().map(|s| s.into_owned()),
            ),
            None => TrackIdentity::unknown(),
        })
    }

    fn write_lyrics(&self, path: &Path, lyrics: &str) -> Result<()> {
        let mut tag = Self::load(path)?.unwrap_or_else(|| Tag::new(TagType::VorbisComments));

        // Replaces every existing LYRICS value
        if !tag.insert_text(ItemKey::Lyrics, lyrics.to_string()) {
            return Err(MetadataError::write(
                path,
                "Vorbis comments rejected the lyrics field",
            ));
        }

        // The stream is rewritten in memory and only lands on disk once lofty
        // succeeded, so a failed write leaves the file as it was.
        let mut bytes = std::fs::read(path).map_err(|e| MetadataError::write(path, e))?;
        let padded = ensure_trailing_padding(&mut bytes)
            .map_err(|reason| MetadataError::write(path, reason))?;
        if padded {
            debug!(file = %path.display(), "Added trailing PADDING block");
        }

        let mut stream = Cursor::new(bytes);
        tag.save_to(&mut stream, WriteOptions::default())
            .map_err(|e| MetadataError::write(path, e))?;

        std::fs::write(path, stream.into_inner()).map_err(|e| MetadataError::write(path, e))
    }

    fn read_lyrics(&self, path: &Path) -> Result<Vec<String>> {
        Ok(Self::load(path)?
            .map(|tag| {
                tag.get_strings(&ItemKey::Lyrics)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Make PADDING the last metadata block of a FLAC stream
///
/// lofty only rewrites metadata correctly when the last block is PADDING; on
/// any other layout (a lone STREAMINFO being the common one) it either panics
/// or leaves the new comment block unreachable. When needed, the last-block
/// flag is moved onto a freshly appended PADDING block.
///
/// Returns whether the stream was changed.
fn ensure_trailing_padding(bytes: &mut Vec<u8>) -> std::result::Result<bool, &'static str> {
    let marker = stream_offset(bytes).ok_or("truncated ID3v2 prefix")?;
    if bytes.get(marker..marker + 4) != Some(&b"fLaC"[..]) {
        return Err("missing fLaC stream marker");
    }

    let mut offset = marker + 4;
    loop {
        let header = bytes
            .get(offset..offset + BLOCK_HEADER_LEN)
            .ok_or("truncated metadata block header")?;
        let is_last = header[0] & LAST_BLOCK_FLAG != 0;
        let block_type = header[0] & !LAST_BLOCK_FLAG;
        let len = u32::from_be_bytes([0, header[1], header[2], header[3]]) as usize;

        let end = offset + BLOCK_HEADER_LEN + len;
        if end > bytes.len() {
            return Err("metadata block runs past the end of the file");
        }

        if is_last {
            if block_type == BLOCK_TYPE_PADDING {
                return Ok(false);
            }
            bytes[offset] &= !LAST_BLOCK_FLAG;
            bytes.splice(end..end, padding_block(TRAILING_PADDING));
            return Ok(true);
        }
        offset = end;
    }
}

/// Offset of the `fLaC` marker, past an ID3v2 tag some encoders prepend
fn stream_offset(bytes: &[u8]) -> Option<usize> {
    if !bytes.starts_with(b"ID3") {
        return Some(0);
    }
    let header = bytes.get(..10)?;
    let size = header[6..10]
        .iter()
        .fold(0usize, |acc, b| (acc << 7) | usize::from(b & 0x7F));
    let footer = if header[5] & 0x10 != 0 { 10 } else { 0 };
    Some(10 + size + footer)
}

/// A last PADDING block with `len` zero bytes
fn padding_block(len: u32) -> Vec<u8> {
    let mut block = vec![0u8; BLOCK_HEADER_LEN + len as usize];
    block[0] = LAST_BLOCK_FLAG | BLOCK_TYPE_PADDING;
    block[1..4].copy_from_slice(&len.to_be_bytes()[1..]);
    block
}
