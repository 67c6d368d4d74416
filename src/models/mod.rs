//! Data models for lyric provider responses.
//!
//! Provider-specific JSON never leaves the [`crate::api`] and
//! [`crate::converters`] modules; everything else works with these types.

pub mod track;

pub use track::{Track, TrackLyrics};
