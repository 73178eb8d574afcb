//! Integration tests for the path-based tag API
//!
//! Exercise the read/write contract of both containers through
//! `tags::read_identity` / `tags::write_lyrics`, using generated fixtures.

use core_metadata::tags;
use core_metadata::testing::{
    bare_flac_stub_bytes, count_uslt_frames, file_sha256, write_flac, write_mp3,
};
use core_metadata::{AudioFile, MetadataError, TrackIdentity};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_untagged_files_read_as_placeholders() {
    let dir = tempdir().unwrap();
    let mp3 = dir.path().join("bare.mp3");
    let flac = dir.path().join("bare.flac");
    write_mp3(&mp3, None, None).unwrap();
    write_flac(&flac, None, None).unwrap();

    for path in [&mp3, &flac] {
        let identity = tags::read_identity(path).unwrap().unwrap();
        assert_eq!(identity.artist, "Unknown Artist");
        assert_eq!(identity.title, "Unknown Title");
    }
}

#[test]
fn test_fields_default_independently_for_both_formats() {
    let dir = tempdir().unwrap();
    let mp3 = dir.path().join("artist_only.mp3");
    let flac = dir.path().join("title_only.flac");
    write_mp3(&mp3, Some("X"), None).unwrap();
    write_flac(&flac, None, Some("Y")).unwrap();

    assert_eq!(
        tags::read_identity(&mp3).unwrap(),
        Some(TrackIdentity::new("X", "Unknown Title"))
    );
    assert_eq!(
        tags::read_identity(&flac).unwrap(),
        Some(TrackIdentity::new("Unknown Artist", "Y"))
    );
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("LOUD.MP3");
    write_mp3(&path, Some("X"), Some("Y")).unwrap();

    assert_eq!(
        tags::read_identity(&path).unwrap(),
        Some(TrackIdentity::new("X", "Y"))
    );
    assert!(tags::write_lyrics(&path, "[00:01.00]la").unwrap());
}

#[test]
fn test_unsupported_extension_is_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"not audio").unwrap();
    let before = file_sha256(&path).unwrap();

    assert!(tags::read_identity(&path).unwrap().is_none());
    assert!(!tags::write_lyrics(&path, "[00:01.00]la").unwrap());

    assert_eq!(file_sha256(&path).unwrap(), before);
}

#[test]
fn test_empty_lyrics_are_rejected_without_touching_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.flac");
    write_flac(&path, Some("X"), Some("Y")).unwrap();
    let before = file_sha256(&path).unwrap();

    let err = tags::write_lyrics(&path, "").unwrap_err();
    assert!(matches!(err, MetadataError::InvalidMetadata(_)));
    assert_eq!(file_sha256(&path).unwrap(), before);
}

#[test]
fn test_mp3_write_is_additive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.mp3");
    write_mp3(&path, Some("X"), Some("Y")).unwrap();
    assert_eq!(count_uslt_frames(&path).unwrap(), 0);

    assert!(tags::write_lyrics(&path, "[00:01.00]first").unwrap());
    assert_eq!(count_uslt_frames(&path).unwrap(), 1);

    assert!(tags::write_lyrics(&path, "[00:01.00]second").unwrap());
    assert_eq!(count_uslt_frames(&path).unwrap(), 2);

    assert!(tags::write_lyrics(&path, "[00:01.00]third").unwrap());
    assert_eq!(count_uslt_frames(&path).unwrap(), 3);

    let lyrics = AudioFile::from_path(&path).unwrap().read_lyrics().unwrap();
    assert_eq!(
        lyrics,
        vec![
            "[00:01.00]first".to_string(),
            "[00:01.00]second".to_string(),
            "[00:01.00]third".to_string(),
        ]
    );
    assert_eq!(
        tags::read_identity(&path).unwrap(),
        Some(TrackIdentity::new("X", "Y"))
    );
}

#[test]
fn test_flac_write_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("b.flac");
    write_flac(&path, None, None).unwrap();

    assert!(tags::write_lyrics(&path, "[00:01.00]first").unwrap());
    assert!(tags::write_lyrics(&path, "[00:01.00]second").unwrap());

    let file = AudioFile::from_path(&path).unwrap();
    assert_eq!(
        file.read_lyrics().unwrap(),
        vec!["[00:01.00]second".to_string()]
    );
    // Placeholders still apply after the comment block was created
    assert_eq!(file.read_identity().unwrap(), TrackIdentity::unknown());
}

#[test]
fn test_flac_without_padding_block_is_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bare.flac");
    fs::write(&path, bare_flac_stub_bytes()).unwrap();

    assert!(tags::write_lyrics(&path, "[00:01.00]b").unwrap());

    assert_eq!(
        AudioFile::from_path(&path).unwrap().read_lyrics().unwrap(),
        vec!["[00:01.00]b".to_string()]
    );
}

#[test]
fn test_corrupt_supported_file_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.flac");
    fs::write(&path, b"RIFF....WAVE").unwrap();

    assert!(tags::read_identity(&path).is_err());
    assert!(tags::write_lyrics(&path, "[00:01.00]la").is_err());
}
