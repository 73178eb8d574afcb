//! Track identity used as the lyrics search key

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when a file has no artist tag
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Placeholder used when a file has no title tag
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Artist and title read from a file's tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackIdentity {
    pub artist: String,
    pub title: String,
}

impl TrackIdentity {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }

    /// Build an identity from optional tag values
    ///
    /// Each missing or blank field falls back to its placeholder on its own.
    /// Present values are kept verbatim, surrounding whitespace included.
    pub fn from_tags(artist: Option<String>, title: Option<String>) -> Self {
        Self {
            artist: present(artist).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            title: present(title).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        }
    }

    /// Identity of a file with no tags at all
    pub fn unknown() -> Self {
        Self::from_tags(None, None)
    }

    /// Free-text query sent to the lyrics provider
    pub fn search_query(&self) -> String {
        format!("{} {}", self.artist, self.title)
    }

    /// Whether both fields fell back to their placeholders
    pub fn is_unknown(&self) -> bool {
        self.artist == UNKNOWN_ARTIST && self.title == UNKNOWN_TITLE
    }
}

impl fmt::Display for TrackIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_default_independently() {
        let only_artist = TrackIdentity::from_tags(Some("X".into()), None);
        assert_eq!(only_artist, TrackIdentity::new("X", UNKNOWN_TITLE));

        let only_title = TrackIdentity::from_tags(None, Some("Y".into()));
        assert_eq!(only_title, TrackIdentity::new(UNKNOWN_ARTIST, "Y"));

        assert!(TrackIdentity::unknown().is_unknown());
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let identity = TrackIdentity::from_tags(Some("   ".into()), Some(String::new()));
        assert_eq!(identity, TrackIdentity::unknown());
    }

    #[test]
    fn test_search_query() {
        assert_eq!(TrackIdentity::new("X", "Y").search_query(), "X Y");
        assert_eq!(
            TrackIdentity::unknown().search_query(),
            "Unknown Artist Unknown Title"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TrackIdentity::new("ABBA", "SOS").to_string(), "ABBA - SOS");
    }
}
