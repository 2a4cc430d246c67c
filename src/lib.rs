//! Spotify Playlist Statistics Library
//!
//! Fetches a playlist from the Spotify Web API with client-credentials
//! authentication, normalizes its tracks, optionally enriches them with album
//! labels and artist genres, and aggregates them into [`types::PlaylistStats`].
//!
//! # Modules
//!
//! - `cli` - Command implementations rendering tables and bar charts
//! - `config` - `.env` loading and the explicit [`config::Config`]
//! - `error` - Error type shared by the library
//! - `spotify` - Web API client: token, tracks, enrichment, playlist info
//! - `stats` - Pure aggregation of tracks into statistics
//! - `types` - API payloads, normalized tracks and statistics
//! - `utils` - Formatting, parsing and sorting helpers
//!
//! # Example
//!
//! ```
//! use spstats::{config::Config, spotify::{FetchOptions, SpotifyClient}};
//!
//! #[tokio::main]
//! async fn main() -> spstats::Res<()> {
//!     spstats::config::load_env().await.ok();
//!     let client = SpotifyClient::new(Config::from_env()?)?;
//!     let info = client
//!         .get_playlist_info("37i9dQZF1DXcBWIGoYBM5M", &FetchOptions::default())
//!         .await?;
//!     println!("{} tracks, {}", info.stats.number_of_tracks, info.stats.total_duration);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod stats;
pub mod types;
pub mod utils;

pub use error::{Error, Result as Res};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits with code 1.
///
/// Only for failures the CLI cannot recover from; code after the call does
/// not run.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning with a yellow exclamation mark to stderr.
///
/// Warnings go to stderr so `spstats raw` output stays valid JSON.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
