//! # Metadata & Lyrics Module
//!
//! Reads track identity from audio files, searches for synchronized lyrics and
//! embeds them back into the file.
//!
//! ## Overview
//!
//! This module handles:
//! - Container dispatch by extension ([`AudioFormat`], [`AudioFile`])
//! - Tag codecs: ID3v2 for MP3 ([`tags::Id3Codec`]), Vorbis comments for FLAC
//!   ([`tags::VorbisCodec`])
//! - Lyrics search through a pluggable [`LyricsProvider`], LRCLIB by default
//! - Fixture builders for tests ([`testing`])

pub mod error;
pub mod format;
pub mod identity;
pub mod lyrics;
pub mod tags;
pub mod testing;

pub use error::{MetadataError, Result};
pub use format::{AudioFile, AudioFormat};
pub use identity::{TrackIdentity, UNKNOWN_ARTIST, UNKNOWN_TITLE};
pub use lyrics::{LrcLibProvider, LyricsProvider, LyricsService};
pub use tags::TagCodec;
