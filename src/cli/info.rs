use crate::{info, spotify::FetchOptions, success};

use super::{load_playlist, report_failed_pages};

/// Prints playlist metadata and the headline statistics.
///
/// # Output Example
///
/// ```text
/// [o] Name: Today's Top Hits
/// [o] Description: The hottest 50.
/// [o] Owner: Spotify
/// [o] Followers: 34512345
/// [o] URL: https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
/// [✓] 50 tracks, 2h41m7s
/// ```
///
/// Enrichment is skipped since nothing here needs labels or genres.
pub async fn info(playlist: String) {
    let playlist_info = load_playlist(&playlist, FetchOptions { enrich: false }).await;

    info!("Name: {}", playlist_info.name);
    if !playlist_info.description.is_empty() {
        info!("Description: {}", playlist_info.description);
    }
    info!("Owner: {}", playlist_info.owner);
    if !playlist_info.owner_image.is_empty() {
        info!("Owner image: {}", playlist_info.owner_image);
    }
    info!("Followers: {}", playlist_info.followers);
    info!("URL: {}", playlist_info.url);
    if !playlist_info.image.is_empty() {
        info!("Cover: {}", playlist_info.image);
    }

    report_failed_pages(&playlist_info);
    success!(
        "{} tracks, {}",
        playlist_info.stats.number_of_tracks,
        playlist_info.stats.total_duration
    );
}
