//! JSON to model converters.
//!
//! This module turns raw Musixmatch API responses into the crate's typed
//! models. Every response is wrapped as `{"message": {"header": ..., "body": ...}}`.

use serde_json::Value;
use tracing::debug;

use crate::error::{LyricsError, Result};
use crate::models::Track;

/// Get the `message.body` object of a Musixmatch response.
pub fn message_body(json: &Value) -> Option<&Value> {
    json.get("message").and_then(|m| m.get("body"))
}

/// Get the `message.header.status_code` of a Musixmatch response.
pub fn header_status(json: &Value) -> Option<u64> {
    json.get("message")
        .and_then(|m| m.get("header"))
        .and_then(|h| h.get("status_code"))
        .and_then(|c| c.as_u64())
}

/// Get a required string field.
fn require_str(json: &Value, key: &str) -> Result<String> {
    json.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| LyricsError::Lookup(format!("Missing field '{}'", key)))
}

/// Get the track ID (handles both numeric and string IDs).
fn require_id(json: &Value, key: &str) -> Result<u64> {
    json.get(key)
        .and_then(|v| v.as_u64().or_else(|| v.as_str().and_then(|s| s.parse().ok())))
        .ok_or_else(|| LyricsError::Lookup(format!("Missing field '{}'", key)))
}

/// Extract the name of the first primary genre.
fn primary_genre(json: &Value) -> Result<String> {
    json.get("primary_genres")
        .and_then(|g| g.get("music_genre_list"))
        .and_then(|l| l.as_array())
        .and_then(|l| l.first())
        .and_then(|g| g.get("music_genre"))
        .and_then(|g| g.get("music_genre_name"))
        .and_then(|n| n.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| LyricsError::Lookup("Track has no primary genre".to_string()))
}

/// Parse a single Musixmatch track object.
///
/// Fails with [`LyricsError::Lookup`] if any descriptor field is absent.
pub fn parse_track(json: &Value) -> Result<Track> {
    Ok(Track {
        id: require_id(json, "commontrack_id")?,
        title: require_str(json, "track_name")?,
        artist: require_str(json, "artist_name")?,
        album: require_str(json, "album_name")?,
        genre: primary_genre(json)?,
    })
}

/// Parse the body of a `track.get` response.
pub fn parse_track_body(json: &Value) -> Result<Track> {
    let track = message_body(json)
        .and_then(|b| b.get("track"))
        .ok_or_else(|| LyricsError::Lookup("Response has no track".to_string()))?;

    parse_track(track)
}

/// Parse the body of a `track.search` response.
///
/// Looks at no more than `limit` entries. Entries that cannot be turned into a
/// complete [`Track`] are skipped without affecting the others.
pub fn parse_track_list(json: &Value, limit: usize) -> Vec<Track> {
    let Some(entries) = message_body(json)
        .and_then(|b| b.get("track_list"))
        .and_then(|l| l.as_array())
    else {
        return Vec::new();
    };

    entries
        .iter()
        .take(limit)
        .enumerate()
        .filter_map(|(slot, entry)| {
            let parsed = entry
                .get("track")
                .ok_or_else(|| LyricsError::Lookup("Entry has no track".to_string()))
                .and_then(parse_track);

            match parsed {
                Ok(track) => Some(track),
                Err(e) => {
                    debug!("Skipping search result {}: {}", slot, e);
                    None
                }
            }
        })
        .collect()
}

/// Parse the body of a `track.lyrics.get` response.
///
/// The lyric text is returned exactly as the provider sent it.
pub fn parse_lyrics_body(json: &Value) -> Result<String> {
    message_body(json)
        .and_then(|b| b.get("lyrics"))
        .and_then(|l| l.get("lyrics_body"))
        .and_then(|t| t.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| LyricsError::Lookup("Response has no lyrics".to_string()))
}

/// Parse the first translation of a DeepL `/v2/translate` response.
pub fn parse_translation(json: &Value) -> Result<String> {
    json.get("translations")
        .and_then(|t| t.as_array())
        .and_then(|t| t.first())
        .and_then(|t| t.get("text"))
        .and_then(|t| t.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| LyricsError::ApiError("Translation response has no text".to_string()))
}
