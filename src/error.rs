//! Error types for the lyric and translation clients.

use thiserror::Error;

/// Main error type for all LyriLingual operations.
#[derive(Debug, Error)]
pub enum LyricsError {
    /// The provider answered with a non-success HTTP status.
    #[error("Transport error: {endpoint} returned {status}")]
    Transport {
        /// Endpoint that was called.
        endpoint: String,
        /// HTTP status returned.
        status: reqwest::StatusCode,
    },

    /// HTTP request failed before a response arrived.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// A single-record response lacked the expected structure.
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Missing or rejected API key.
    #[error("Bad credentials: {0}")]
    BadCredentials(String),

    /// Error reported by the provider inside an otherwise successful response.
    #[error("API error: {0}")]
    ApiError(String),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LyricsError {
    /// Whether this error came from the network layer rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, LyricsError::Transport { .. } | LyricsError::RequestError(_))
    }

    /// Whether this error is a failed single-record lookup.
    pub fn is_lookup(&self) -> bool {
        matches!(self, LyricsError::Lookup(_))
    }
}

impl From<toml::de::Error> for LyricsError {
    fn from(err: toml::de::Error) -> Self {
        LyricsError::ConfigError(err.to_string())
    }
}

/// Result type alias for LyriLingual operations.
pub type Result<T> = std::result::Result<T, LyricsError>;
