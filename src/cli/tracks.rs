use tabled::Table;

use crate::{
    spotify::FetchOptions,
    types::{TrackSortKey, TrackTableRow},
    utils,
};

use super::{load_playlist, report_failed_pages};

/// Prints the playlist's tracks as a table.
///
/// Without `sort` the playlist order is kept. Popularity and duration sort
/// numerically, name and artists lexicographically.
pub async fn tracks(playlist: String, sort: Option<TrackSortKey>, descending: bool) {
    let mut playlist_info = load_playlist(&playlist, FetchOptions { enrich: false }).await;

    if let Some(key) = sort {
        utils::sort_tracks(&mut playlist_info.tracks, key, descending);
    }

    let rows: Vec<TrackTableRow> = playlist_info
        .tracks
        .iter()
        .map(TrackTableRow::from)
        .collect();
    println!(
        "{name}\tTracks: {count}\tDuration: {duration}\n{table}",
        name = playlist_info.name,
        count = playlist_info.stats.number_of_tracks,
        duration = playlist_info.stats.total_duration,
        table = Table::new(rows)
    );

    report_failed_pages(&playlist_info);
}
