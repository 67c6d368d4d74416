//! Credentials configuration.
//!
//! Loaded once at startup from a TOML file and then only read:
//!
//! ```toml
//! musixmatch_api_key = "..."
//! deepl_api_key = "...:fx"
//! ```
//!
//! A missing file or key is not an error here. The affected client is
//! still constructed and fails with `BadCredentials` on its first call.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// API credentials for both providers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Musixmatch API key for search and lyrics lookups.
    pub musixmatch_api_key: Option<String>,

    /// DeepL API key for translations.
    pub deepl_api_key: Option<String>,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        Ok(config.normalized())
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read and `ConfigError` if it is not valid TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load configuration, falling back to empty credentials if the file is missing.
    ///
    /// Malformed files are still reported as errors.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "Config file {} not found; API clients will have no credentials",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Override keys with explicitly supplied values.
    pub fn with_overrides(mut self, musixmatch: Option<String>, deepl: Option<String>) -> Self {
        if musixmatch.is_some() {
            self.musixmatch_api_key = musixmatch;
        }
        if deepl.is_some() {
            self.deepl_api_key = deepl;
        }
        self.normalized()
    }

    /// Blank keys count as missing.
    fn normalized(mut self) -> Self {
        for key in [&mut self.musixmatch_api_key, &mut self.deepl_api_key] {
            if key.as_deref().is_some_and(|k| k.trim().is_empty()) {
                *key = None;
            }
        }
        self
    }
}
