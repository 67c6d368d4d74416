use clap::{Parser, Subcommand};
use lyrilingual::{Config, LyriLingual, DEFAULT_SEARCH_LIMIT};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "lyrilingual-cli")]
#[command(about = "CLI for LyriLingual - find songs by their lyrics and translate them", long_about = None)]
struct Cli {
    /// Path to the TOML file holding the API keys
    #[arg(short, long, env = "LYRILINGUAL_CONFIG", default_value = lyrilingual::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Musixmatch API key, overrides the config file
    #[arg(long, env = "MUSIXMATCH_API_KEY", hide_env_values = true)]
    musixmatch_key: Option<String>,

    /// DeepL API key, overrides the config file
    #[arg(long, env = "DEEPL_API_KEY", hide_env_values = true)]
    deepl_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for songs containing a lyric fragment
    Search {
        /// Lyric fragment
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a track and its lyrics
    Lyrics {
        /// Musixmatch commontrack ID
        id: u64,
    },
    /// Translate the lyrics of a track
    Translate {
        /// Musixmatch commontrack ID
        id: u64,

        /// Target language code (e.g. EN-GB, DE, FR)
        #[arg(short, long)]
        lang: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lyrilingual=info")))
        .init();

    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)?
        .with_overrides(cli.musixmatch_key.clone(), cli.deepl_key.clone());
    let ll = LyriLingual::from_config(&config)?;

    match &cli.command {
        Commands::Search { query, limit, json } => {
            let results = ll.find_candidates(query, *limit).await?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No results found");
            } else {
                for (i, track) in results.iter().enumerate() {
                    println!(
                        "{}. {} - {} [{}] (ID: {})",
                        i + 1,
                        track.artist,
                        track.title,
                        track.album,
                        track.id
                    );
                }
            }
        }
        Commands::Lyrics { id } => {
            let page = ll.lyrics_page(*id).await?;
            println!("{}", page.track.title);
            println!("   Artist: {}", page.track.artist);
            println!("   Album:  {}", page.track.album);
            println!("   Genre:  {}", page.track.genre);
            println!();
            println!("{}", page.lyrics);
        }
        Commands::Translate { id, lang } => {
            let lyrics = ll.fetch_lyrics(*id).await?;
            let translated = ll.translate_lyrics(lang, &lyrics).await?;
            println!("{}", translated);
        }
    }

    Ok(())
}
