//! Unified LyriLingual interface.
//!
//! This module ties the lyric provider and the translator together into the
//! search → resolve → lyrics → translation flow used by the front ends.

use tracing::{debug, info};

use crate::api::{DeeplApi, LyricsProvider, MusixmatchApi, Translator};
use crate::config::Config;
use crate::error::Result;
use crate::models::{Track, TrackLyrics};

/// Number of candidates the search view asks for.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Main LyriLingual interface.
///
/// Holds no state besides its two clients; every call is a fresh round trip
/// and nothing is cached.
///
/// # Example
///
/// ```rust,no_run
/// use lyrilingual::{Config, LyriLingual, DEFAULT_SEARCH_LIMIT};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::load("config.toml")?;
///     let ll = LyriLingual::from_config(&config)?;
///
///     let candidates = ll.find_candidates("Bailando", DEFAULT_SEARCH_LIMIT).await?;
///     if let Some(track) = candidates.first() {
///         let lyrics = ll.fetch_track_lyrics(track).await?;
///         println!("{}", ll.translate_lyrics("EN-GB", &lyrics).await?);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LyriLingual<P = MusixmatchApi, T = DeeplApi> {
    provider: P,
    translator: T,
}

impl LyriLingual {
    /// Create the default Musixmatch + DeepL pipeline.
    ///
    /// Missing credentials do not fail here, only the calls that need them.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = MusixmatchApi::new(config)?;
        let translator = DeeplApi::new(config)?;

        info!(
            "LyriLingual ready (musixmatch key: {}, deepl key: {})",
            provider.has_api_key(),
            translator.has_api_key()
        );

        Ok(Self::new(provider, translator))
    }
}

impl<P: LyricsProvider, T: Translator> LyriLingual<P, T> {
    /// Create a pipeline from explicit clients.
    pub fn new(provider: P, translator: T) -> Self {
        Self {
            provider,
            translator,
        }
    }

    /// Get the lyric provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the translator.
    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Find up to `limit` tracks whose lyrics contain `query`.
    ///
    /// The query is lower-cased; ranking is left to the provider.
    pub async fn find_candidates(&self, query: &str, limit: usize) -> Result<Vec<Track>> {
        let query = query.to_lowercase();
        debug!("Finding candidates for {:?} (limit {})", query, limit);
        self.provider.search_tracks_by_lyrics(&query, limit).await
    }

    /// Resolve a selected search result into its full descriptor.
    pub async fn resolve(&self, id: u64) -> Result<Track> {
        self.provider.get_track_by_id(id).await
    }

    /// Fetch the lyrics of a track by ID.
    pub async fn fetch_lyrics(&self, id: u64) -> Result<String> {
        self.provider.get_lyrics_by_id(id).await
    }

    /// Fetch the lyrics of an already resolved track.
    ///
    /// Goes to the provider on every call.
    pub async fn fetch_track_lyrics(&self, track: &Track) -> Result<String> {
        self.fetch_lyrics(track.id).await
    }

    /// Translate lyric text into `lang`, passing the text through untouched.
    pub async fn translate_lyrics(&self, lang: &str, text: &str) -> Result<String> {
        self.translator.translate(lang, text).await
    }

    /// Resolve a track and fetch its lyrics, as shown on the lyrics view.
    pub async fn lyrics_page(&self, id: u64) -> Result<TrackLyrics> {
        let track = self.resolve(id).await?;
        let lyrics = self.fetch_track_lyrics(&track).await?;
        Ok(TrackLyrics { track, lyrics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters;
    use crate::error::LyricsError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    /// Provider backed by canned Musixmatch JSON, counting calls.
    #[derive(Default)]
    struct MockProvider {
        search_response: Value,
        track_response: Value,
        lyrics_response: Value,
        queries: Mutex<Vec<(String, usize)>>,
        track_calls: AtomicUsize,
        lyrics_calls: AtomicUsize,
    }

    #[async_trait]
    impl LyricsProvider for MockProvider {
        async fn search_tracks_by_lyrics(
            &self,
            fragment: &str,
            max_results: usize,
        ) -> Result<Vec<Track>> {
            self.queries
                .lock()
                .unwrap()
                .push((fragment.to_string(), max_results));
            Ok(converters::parse_track_list(
                &self.search_response,
                max_results,
            ))
        }

        async fn get_track_by_id(&self, _id: u64) -> Result<Track> {
            self.track_calls.fetch_add(1, Ordering::SeqCst);
            converters::parse_track_body(&self.track_response)
        }

        async fn get_lyrics_by_id(&self, _id: u64) -> Result<String> {
            self.lyrics_calls.fetch_add(1, Ordering::SeqCst);
            converters::parse_lyrics_body(&self.lyrics_response)
        }
    }

    /// Translator that records its inputs.
    #[derive(Default)]
    struct MockTranslator {
        calls: Mutex<Vec<(String, String)>>,
        missing_key: bool,
    }

    #[async_trait]
    impl Translator for MockTranslator {
        async fn translate(&self, target_lang: &str, text: &str) -> Result<String> {
            if self.missing_key {
                return Err(LyricsError::BadCredentials("no key".to_string()));
            }
            self.calls
                .lock()
                .unwrap()
                .push((target_lang.to_string(), text.to_string()));
            Ok(format!("[{}] {}", target_lang, text))
        }
    }

    fn track_json(id: u64, genres: Value) -> Value {
        json!({
            "commontrack_id": id,
            "track_name": format!("Track {}", id),
            "artist_name": "Artist",
            "album_name": "Album",
            "primary_genres": { "music_genre_list": genres }
        })
    }

    fn latin() -> Value {
        json!([{ "music_genre": { "music_genre_name": "Latin" } }])
    }

    fn wrap(body: Value) -> Value {
        json!({ "message": { "header": { "status_code": 200 }, "body": body } })
    }

    fn bailando_provider() -> MockProvider {
        let list: Vec<Value> = vec![
            track_json(1, latin()),
            track_json(2, json!([])),
            track_json(3, latin()),
            track_json(4, json!([])),
            track_json(5, latin()),
        ]
        .into_iter()
        .map(|t| json!({ "track": t }))
        .collect();

        MockProvider {
            search_response: wrap(json!({ "track_list": list })),
            track_response: wrap(json!({ "track": track_json(3, latin()) })),
            lyrics_response: wrap(json!({ "lyrics": { "lyrics_body": "Yo te miro\n..." } })),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_find_candidates_drops_malformed() {
        let ll = LyriLingual::new(bailando_provider(), MockTranslator::default());

        let tracks = assert_ok!(ll.find_candidates("bailando", 5).await);
        let ids: Vec<u64> = tracks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[tokio::test]
    async fn test_find_candidates_lowercases_query() {
        let ll = LyriLingual::new(bailando_provider(), MockTranslator::default());

        assert_ok!(ll.find_candidates("Bailando BAILANDO", 5).await);
        let queries = ll.provider().queries.lock().unwrap().clone();
        assert_eq!(queries, vec![("bailando bailando".to_string(), 5)]);
    }

    #[tokio::test]
    async fn test_find_candidates_bounded_by_limit() {
        let ll = LyriLingual::new(bailando_provider(), MockTranslator::default());

        for limit in 0..8 {
            let tracks = assert_ok!(ll.find_candidates("bailando", limit).await);
            assert!(tracks.len() <= limit);
        }
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let ll = LyriLingual::new(bailando_provider(), MockTranslator::default());

        let a = assert_ok!(ll.resolve(3).await);
        let b = assert_ok!(ll.resolve(3).await);
        assert_eq!(
            (a.id, &a.title, &a.artist, &a.album, &a.genre),
            (b.id, &b.title, &b.artist, &b.album, &b.genre)
        );
        assert_eq!(ll.provider().track_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_resolve_empty_body_is_lookup_failure() {
        let provider = MockProvider {
            track_response: json!({
                "message": { "header": { "status_code": 404 }, "body": [] }
            }),
            ..Default::default()
        };
        let ll = LyriLingual::new(provider, MockTranslator::default());

        let err = assert_err!(ll.resolve(999_999_999).await);
        assert!(err.is_lookup());
    }

    #[tokio::test]
    async fn test_fetch_lyrics_is_not_cached() {
        let ll = LyriLingual::new(bailando_provider(), MockTranslator::default());

        let first = assert_ok!(ll.fetch_lyrics(3).await);
        let second = assert_ok!(ll.fetch_lyrics(3).await);
        assert_eq!(first, second);
        assert_eq!(ll.provider().lyrics_calls.load(Ordering::SeqCst), 2);

        let track = assert_ok!(ll.resolve(3).await);
        assert_ok!(ll.fetch_track_lyrics(&track).await);
        assert_ok!(ll.fetch_track_lyrics(&track).await);
        assert_eq!(ll.provider().lyrics_calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_translation_receives_exact_lyrics() {
        let ll = LyriLingual::new(bailando_provider(), MockTranslator::default());

        let track = assert_ok!(ll.resolve(3).await);
        let lyrics = assert_ok!(ll.fetch_lyrics(track.id).await);
        let translated = assert_ok!(ll.translate_lyrics("EN", &lyrics).await);

        let calls = ll.translator().calls.lock().unwrap().clone();
        assert_eq!(calls, vec![("EN".to_string(), "Yo te miro\n...".to_string())]);
        assert_eq!(translated, "[EN] Yo te miro\n...");
    }

    #[tokio::test]
    async fn test_missing_translation_key_leaves_lookups_working() {
        let translator = MockTranslator {
            missing_key: true,
            ..Default::default()
        };
        let ll = LyriLingual::new(bailando_provider(), translator);

        assert_ok!(ll.find_candidates("bailando", 5).await);
        assert_ok!(ll.resolve(3).await);
        let lyrics = assert_ok!(ll.fetch_lyrics(3).await);

        let err = assert_err!(ll.translate_lyrics("EN", &lyrics).await);
        assert!(matches!(err, LyricsError::BadCredentials(_)));
    }

    #[tokio::test]
    async fn test_lyrics_page() {
        let ll = LyriLingual::new(bailando_provider(), MockTranslator::default());

        let page = assert_ok!(ll.lyrics_page(3).await);
        assert_eq!(page.track.id, 3);
        assert_eq!(page.track.genre, "Latin");
        assert_eq!(page.lyrics, "Yo te miro\n...");
    }

    #[tokio::test]
    async fn test_from_config_without_keys() {
        let ll = assert_ok!(LyriLingual::from_config(&Config::default()));
        assert!(!ll.provider().has_api_key());
        assert!(!ll.translator().has_api_key());

        let err = assert_err!(ll.translate_lyrics("EN", "hola").await);
        assert!(matches!(err, LyricsError::BadCredentials(_)));
    }
}
