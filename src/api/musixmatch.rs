//! Musixmatch API client.
//!
//! This module provides a client for the Musixmatch web API
//! (api.musixmatch.com/ws/1.1). Every request carries the `apikey` parameter.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::Config;
use crate::converters;
use crate::error::{LyricsError, Result};
use crate::models::Track;

/// Base URL for the Musixmatch API.
pub const API_BASE_URL: &str = "https://api.musixmatch.com/ws/1.1/";

/// Lyrics language searches are restricted to.
const SEARCH_LYRICS_LANGUAGE: &str = "es";

/// Musixmatch API client.
///
/// Stateless apart from the API key captured at construction. Cloning is
/// cheap and clones share the underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use lyrilingual::{Config, MusixmatchApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::load("config.toml")?;
///     let api = MusixmatchApi::new(&config)?;
///     for track in api.search_tracks_by_lyrics("bailando", 5).await? {
///         println!("{} ({})", track.display_name(), track.id);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MusixmatchApi {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl MusixmatchApi {
    /// Create a new Musixmatch client from the configured credentials.
    ///
    /// A missing key is accepted here; requests fail with `BadCredentials`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("lyrilingual/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
            api_key: config.musixmatch_api_key.clone(),
        })
    }

    /// Point the client at a different API host.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Make a GET request to a Musixmatch endpoint.
    async fn query_api(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            LyricsError::BadCredentials("No Musixmatch API key configured".to_string())
        })?;

        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&[("apikey", api_key)])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Musixmatch returned HTTP {} for {}", status, endpoint);
            return Err(LyricsError::Transport {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let data: Value = response.json().await?;

        // Application errors arrive with HTTP 200 and a status code in the header
        match converters::header_status(&data) {
            None | Some(200) => Ok(data),
            Some(code @ (401 | 402 | 403)) => {
                error!("Musixmatch rejected the API key ({})", code);
                Err(LyricsError::BadCredentials(format!(
                    "Musixmatch status {} for {}",
                    code, endpoint
                )))
            }
            Some(404) => Err(LyricsError::Lookup(format!(
                "Musixmatch found nothing for {} {:?}",
                endpoint, params
            ))),
            Some(code) => {
                error!("Musixmatch API error {} for {}", code, endpoint);
                Err(LyricsError::ApiError(format!(
                    "Musixmatch status {} for {}",
                    code, endpoint
                )))
            }
        }
    }

    /// Query parameters of a lyric search.
    pub fn search_params(fragment: &str, max_results: usize) -> Vec<(&'static str, String)> {
        vec![
            ("q_lyrics", fragment.to_string()),
            ("f_lyrics_language", SEARCH_LYRICS_LANGUAGE.to_string()),
            ("page_size", max_results.to_string()),
            ("page", "1".to_string()),
            ("s_track_rating", "desc".to_string()),
        ]
    }

    /// Search tracks by a lyric fragment, best rated first.
    ///
    /// Reads at most `max_results` entries of the response. Entries without a
    /// complete record (for example an empty genre list) are dropped, so fewer
    /// tracks than requested, or none, may come back.
    pub async fn search_tracks_by_lyrics(
        &self,
        fragment: &str,
        max_results: usize,
    ) -> Result<Vec<Track>> {
        let response = match self
            .query_api("track.search", &Self::search_params(fragment, max_results))
            .await
        {
            Ok(response) => response,
            // Nothing found is an empty result, not a failed lookup
            Err(LyricsError::Lookup(e)) => {
                debug!("Search for {:?} found nothing: {}", fragment, e);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let tracks = converters::parse_track_list(&response, max_results);
        debug!(
            "Search for {:?} yielded {} of {} requested tracks",
            fragment,
            tracks.len(),
            max_results
        );
        Ok(tracks)
    }

    /// Get a track by its `commontrack_id`.
    ///
    /// # Errors
    ///
    /// Returns `Lookup` if the response has no complete track record.
    pub async fn get_track_by_id(&self, id: u64) -> Result<Track> {
        let response = self
            .query_api("track.get", &[("commontrack_id", id.to_string())])
            .await?;
        converters::parse_track_body(&response)
    }

    /// Get the lyric body of a track by its `commontrack_id`.
    ///
    /// # Errors
    ///
    /// Returns `Lookup` if the response has no lyrics.
    pub async fn get_lyrics_by_id(&self, id: u64) -> Result<String> {
        let response = self
            .query_api("track.lyrics.get", &[("commontrack_id", id.to_string())])
            .await?;
        converters::parse_lyrics_body(&response)
    }
}
