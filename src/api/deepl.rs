//! DeepL translation client.
//!
//! Talks to the DeepL v2 REST API. Free-tier keys (ending in `:fx`) are
//! served from a separate host.

use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::config::Config;
use crate::converters;
use crate::error::{LyricsError, Result};

/// DeepL API host for paid keys.
pub const PRO_BASE_URL: &str = "https://api.deepl.com";

/// DeepL API host for free-tier keys.
pub const FREE_BASE_URL: &str = "https://api-free.deepl.com";

/// Translate endpoint path.
const TRANSLATE_PATH: &str = "/v2/translate";

/// DeepL API client.
#[derive(Debug, Clone)]
pub struct DeeplApi {
    client: Client,
    base_url: Option<String>,
    api_key: Option<String>,
}

impl DeeplApi {
    /// Create a new DeepL client from the configured credentials.
    ///
    /// A missing key is accepted here; translations fail with `BadCredentials`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("lyrilingual/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: None,
            api_key: config.deepl_api_key.clone(),
        })
    }

    /// Point the client at a fixed API host instead of picking one from the key.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the API host for a key.
    pub fn host_for_key(api_key: &str) -> &'static str {
        if api_key.ends_with(":fx") {
            FREE_BASE_URL
        } else {
            PRO_BASE_URL
        }
    }

    /// Translate `text` into `target_lang` (e.g. "EN-GB", "DE").
    ///
    /// The source language is left for DeepL to detect.
    pub async fn translate(&self, target_lang: &str, text: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            LyricsError::BadCredentials("No DeepL API key configured".to_string())
        })?;

        let host = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| Self::host_for_key(api_key));
        let url = format!("{}{}", host, TRANSLATE_PATH);
        debug!("POST {} ({} chars to {})", url, text.len(), target_lang);

        let body = json!({
            "text": [text],
            "target_lang": target_lang,
        });

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            error!("DeepL rejected the API key ({})", status);
            return Err(LyricsError::BadCredentials(format!(
                "DeepL returned {}",
                status
            )));
        }
        if !status.is_success() {
            error!("DeepL returned HTTP {}", status);
            return Err(LyricsError::Transport {
                endpoint: TRANSLATE_PATH.to_string(),
                status,
            });
        }

        let data: Value = response.json().await?;
        converters::parse_translation(&data)
    }
}
