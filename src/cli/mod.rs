//! # CLI Module
//!
//! User-facing commands of `spstats`. Every command resolves the playlist
//! argument, runs the full fetch pipeline behind a spinner and renders one view
//! of the resulting [`PlaylistInfo`]:
//!
//! - [`info`] - playlist metadata and headline numbers
//! - [`tracks`] - sortable track table
//! - [`stats`] - top-N bar charts for artists, labels and genres
//! - [`raw`] - the complete snapshot as pretty JSON
//!
//! ```text
//! CLI Layer (rendering)
//!     ↓
//! SpotifyClient (token → metadata → pages → enrichment → stats)
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Usage
//!
//! ```bash
//! spstats info 37i9dQZF1DXcBWIGoYBM5M
//! spstats tracks https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M --sort popularity --desc
//! spstats stats spotify:playlist:37i9dQZF1DXcBWIGoYBM5M --top 10
//! spstats raw 37i9dQZF1DXcBWIGoYBM5M > playlist.json
//! ```
//!
//! Ctrl-C while the spinner is running cancels all outstanding requests.

mod info;
mod raw;
mod stats;
mod tracks;

pub use info::info;
pub use raw::raw;
pub use stats::stats;
pub use tracks::tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;

use crate::{
    config::Config,
    error,
    spotify::{FetchOptions, SpotifyClient},
    types::PlaylistInfo,
    utils, warning,
};

/// Resolves `playlist`, fetches it and returns the snapshot.
///
/// Exits the process with an error message when configuration is missing,
/// the playlist argument is invalid, authentication fails or the user
/// cancels.
async fn load_playlist(playlist: &str, options: FetchOptions) -> PlaylistInfo {
    let playlist_id = match utils::parse_playlist_id(playlist) {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let client = match SpotifyClient::new(config) {
        Ok(client) => client,
        Err(e) => error!("Cannot create HTTP client: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching playlist {playlist_id}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let result = client
        .get_playlist_info_cancellable(&playlist_id, &options, &cancel)
        .await;
    pb.finish_and_clear();

    match result {
        Ok(info) => info,
        Err(e) => error!("Failed to fetch playlist {}: {}", playlist_id, e),
    }
}

/// Warns when some track pages were missing from the aggregation.
fn report_failed_pages(info: &PlaylistInfo) {
    if info.failed_pages.is_empty() {
        return;
    }

    let offsets = info
        .failed_pages
        .iter()
        .map(|offset| offset.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    warning!(
        "{} track page(s) could not be fetched (offsets {}); statistics are incomplete.",
        info.failed_pages.len(),
        offsets
    );
}

/// Warns when album or artist lookups were missing from the enrichment.
fn report_failed_batches(info: &PlaylistInfo) {
    let failed = &info.failed_batches;

    if failed.albums > 0 {
        warning!(
            "{} album lookup batch(es) failed; affected tracks count under the Unknown label.",
            failed.albums
        );
    }
    if failed.artists > 0 {
        warning!(
            "{} artist lookup batch(es) failed; the genre breakdown is incomplete.",
            failed.artists
        );
    }
}
