//! API clients for the lyric and translation providers.
//!
//! This module provides two API clients:
//! - [`MusixmatchApi`]: track search, track lookup and lyrics (API key required)
//! - [`DeeplApi`]: text translation (API key required)
//!
//! The [`LyricsProvider`] and [`Translator`] traits are the seams the
//! [`crate::LyriLingual`] pipeline is written against, so tests can swap in
//! their own implementations.

pub mod deepl;
pub mod musixmatch;

use async_trait::async_trait;

pub use deepl::DeeplApi;
pub use musixmatch::MusixmatchApi;

use crate::error::Result;
use crate::models::Track;

/// Source of track metadata and lyrics.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Search tracks whose lyrics match `fragment`, reading at most `max_results` entries.
    async fn search_tracks_by_lyrics(&self, fragment: &str, max_results: usize)
        -> Result<Vec<Track>>;

    /// Look up a single track.
    async fn get_track_by_id(&self, id: u64) -> Result<Track>;

    /// Look up the lyric body of a track.
    async fn get_lyrics_by_id(&self, id: u64) -> Result<String>;
}

/// Machine translation of free text.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_lang`.
    async fn translate(&self, target_lang: &str, text: &str) -> Result<String>;
}

#[async_trait]
impl LyricsProvider for MusixmatchApi {
    async fn search_tracks_by_lyrics(
        &self,
        fragment: &str,
        max_results: usize,
    ) -> Result<Vec<Track>> {
        self.search_tracks_by_lyrics(fragment, max_results).await
    }

    async fn get_track_by_id(&self, id: u64) -> Result<Track> {
        self.get_track_by_id(id).await
    }

    async fn get_lyrics_by_id(&self, id: u64) -> Result<String> {
        self.get_lyrics_by_id(id).await
    }
}

#[async_trait]
impl Translator for DeeplApi {
    async fn translate(&self, target_lang: &str, text: &str) -> Result<String> {
        self.translate(target_lang, text).await
    }
}
