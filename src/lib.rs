//! # LyriLingual
//!
//! Find a song from a fragment of its lyrics, read the full lyrics and get
//! them machine translated.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`LyriLingual`] struct:
//!
//! ```rust,no_run
//! use lyrilingual::{Config, LyriLingual};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Credentials are read once and never change afterwards
//!     let config = Config::load("config.toml")?;
//!     let ll = LyriLingual::from_config(&config)?;
//!
//!     // Search by lyrics, best rated first
//!     let candidates = ll.find_candidates("te miro", 5).await?;
//!
//!     // Resolve the pick, fetch its lyrics and translate them
//!     if let Some(pick) = candidates.first() {
//!         let page = ll.lyrics_page(pick.id).await?;
//!         println!("{} [{}]", page.track.display_name(), page.track.genre);
//!         println!("{}", ll.translate_lyrics("EN-GB", &page.lyrics).await?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Low-Level APIs
//!
//! - [`MusixmatchApi`] - track search, lookup and lyrics
//! - [`DeeplApi`] - text translation
//! - [`converters`] - Musixmatch/DeepL JSON to models

pub mod api;
pub mod config;
pub mod converters;
pub mod error;
mod lyrilingual;
pub mod models;

// Main interface (recommended)
pub use lyrilingual::{LyriLingual, DEFAULT_SEARCH_LIMIT};

// Low-level APIs
pub use api::{DeeplApi, LyricsProvider, MusixmatchApi, Translator};
pub use config::Config;
pub use error::LyricsError;
pub use models::{Track, TrackLyrics};
