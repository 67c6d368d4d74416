//! Track-related models.
//!
//! This module contains the crate's own track descriptor and the
//! track-plus-lyrics pair rendered by the lyrics view.

use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A song as seen by the rest of the crate.
///
/// Built only from a complete provider record; every field is populated.
/// Equality and hashing consider `id` alone.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    /// Provider identifier (Musixmatch `commontrack_id`).
    pub id: u64,

    /// Track title.
    pub title: String,

    /// Artist name(s) as displayed by the provider.
    pub artist: String,

    /// Album title.
    pub album: String,

    /// Primary genre name.
    pub genre: String,
}

impl Track {
    /// Create a new track descriptor.
    pub fn new<S1, S2, S3, S4>(id: u64, title: S1, artist: S2, album: S3, genre: S4) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            genre: genre.into(),
        }
    }

    /// Get a one-line "Artist - Title" label.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A resolved track together with its lyric body.
#[derive(Debug, Clone, Serialize)]
pub struct TrackLyrics {
    /// The resolved track.
    pub track: Track,

    /// Raw lyric text as returned by the provider.
    pub lyrics: String,
}
