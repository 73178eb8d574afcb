//! ID3v2 codec for MP3 files
//!
//! The id3 decoder merges USLT frames that share language and description,
//! which would collapse earlier lyrics on every rewrite. Lyrics frames are
//! therefore recovered from the raw tag, one frame at a time, and everything
//! else goes through the regular [`Tag`] API.

use id3::frame::{Content, Frame, Lyrics};
use id3::{ErrorKind, Tag, TagLike, Version};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

use super::{TagCodec, LYRICS_DESCRIPTION, LYRICS_LANGUAGE};
use crate::error::{MetadataError, Result};
use crate::identity::TrackIdentity;

const HEADER_LEN: usize = 10;
const FLAG_UNSYNCHRONISATION: u8 = 0x80;
const FLAG_EXTENDED_HEADER: u8 = 0x40;

/// Reads artist/title from and appends USLT frames to ID3v2 tags
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3Codec;

impl Id3Codec {
    /// Load the ID3v2 tag, `None` if the file carries none
    fn load(path: &Path) -> Result<Option<Tag>> {
        match Tag::read_from_path(path) {
            Ok(tag) => Ok(Some(tag)),
            Err(e) if matches!(e.kind, ErrorKind::NoTag) => {
                debug!(file = %path.display(), "No ID3v2 tag");
                Ok(None)
            }
            Err(e) => Err(MetadataError::read(path, e)),
        }
    }

    /// Every lyrics frame of `tag`, duplicates included, in tag order
    fn stored_lyrics(path: &Path, tag: &Tag) -> Result<Vec<Lyrics>> {
        let raw = read_raw_tag(path).map_err(|e| MetadataError::read(path, e))?;
        Ok(match split_uslt_frames(&raw) {
            Some(lyrics) => lyrics,
            None => {
                debug!(
                    file = %path.display(),
                    "Tag layout not walkable, using merged lyrics frames"
                );
                tag.lyrics().cloned().collect()
            }
        })
    }
}

impl TagCodec for Id3Codec {
    fn read_identity(&self, path: &Path) -> Result<TrackIdentity> {
        Ok(match Self::load(path)? {
            Some(tag) => TrackIdentity::from_tags(
                tag.artist().map(str::to_owned),
                tag.title().map(str::to_owned),
            ),
            None => TrackIdentity::unknown(),
        })
    }

    fn write_lyrics(&self, path: &Path, lyrics: &str) -> Result<()> {
        let mut tag = match Self::load(path)? {
            Some(mut tag) => {
                let existing = Self::stored_lyrics(path, &tag)?;
                tag.remove("USLT");
                tag.extend(existing.into_iter().map(lyrics_frame));
                tag
            }
            None => Tag::new(),
        };

        // `add_frame` would replace a frame with the same language and
        // description; extending keeps every earlier USLT frame.
        tag.extend(std::iter::once(lyrics_frame(Lyrics {
            lang: LYRICS_LANGUAGE.to_string(),
            description: LYRICS_DESCRIPTION.to_string(),
            text: lyrics.to_string(),
        })));

        tag.write_to_path(path, Version::Id3v24)
            .map_err(|e| MetadataError::write(path, e))
    }

    fn read_lyrics(&self, path: &Path) -> Result<Vec<String>> {
        Ok(match Self::load(path)? {
            Some(tag) => Self::stored_lyrics(path, &tag)?
                .into_iter()
                .map(|l| l.text)
                .collect(),
            None => Vec::new(),
        })
    }
}

fn lyrics_frame(lyrics: Lyrics) -> Frame {
    Frame::with_content("USLT", Content::Lyrics(lyrics))
}

/// Header and body of the ID3v2 tag at the start of the file, empty if none
fn read_raw_tag(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut header = [0u8; HEADER_LEN];
    if file.read_exact(&mut header).is_err() || &header[..3] != b"ID3" {
        return Ok(Vec::new());
    }

    let mut raw = header.to_vec();
    file.take(decode_syncsafe(&header[6..10]) as u64)
        .read_to_end(&mut raw)?;
    Ok(raw)
}

/// Decode each USLT frame of a raw ID3v2.3/2.4 tag on its own
///
/// Returns `None` for layouts the frame walk does not cover: ID3v2.2,
/// tag-wide unsynchronisation, extended headers, or a frame running past the
/// end of the tag.
fn split_uslt_frames(raw: &[u8]) -> Option<Vec<Lyrics>> {
    if raw.len() < HEADER_LEN {
        return Some(Vec::new());
    }

    let major = raw[3];
    let flags = raw[5];
    if !matches!(major, 3 | 4) || flags & (FLAG_UNSYNCHRONISATION | FLAG_EXTENDED_HEADER) != 0 {
        return None;
    }

    let mut lyrics = Vec::new();
    let mut pos = HEADER_LEN;
    while pos + HEADER_LEN <= raw.len() && raw[pos] != 0 {
        let size_bytes = &raw[pos + 4..pos + 8];
        let size = if major == 4 {
            decode_syncsafe(size_bytes)
        } else {
            u32::from_be_bytes([size_bytes[0], size_bytes[1], size_bytes[2], size_bytes[3]])
                as usize
        };

        let end = pos + HEADER_LEN + size;
        if end > raw.len() {
            return None;
        }
        if &raw[pos..pos + 4] == b"USLT" {
            lyrics.push(decode_single_frame(major, &raw[pos..end])?);
        }
        pos = end;
    }

    Some(lyrics)
}

/// Let id3 decode one raw frame by wrapping it in a tag of its own
fn decode_single_frame(major: u8, frame: &[u8]) -> Option<Lyrics> {
    let mut single = Vec::with_capacity(HEADER_LEN + frame.len());
    single.extend_from_slice(b"ID3");
    single.extend_from_slice(&[major, 0, 0]);
    single.extend_from_slice(&encode_syncsafe(frame.len()));
    single.extend_from_slice(frame);

    let tag = Tag::read_from2(Cursor::new(single)).ok()?;
    let lyrics = tag.lyrics().next().cloned();
    lyrics
}

fn decode_syncsafe(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .fold(0usize, |acc, b| (acc << 7) | usize::from(b & 0x7F))
}

fn encode_syncsafe(value: usize) -> [u8; 4] {
    [
        ((value >> 21) & 0x7F) as u8,
        ((value >> 14) & 0x7F) as u8,
        ((value >> 7) & 0x7F) as u8,
        (value & 0x7F) as u8,
    ]
}
