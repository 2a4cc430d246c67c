use crate::{error, spotify::FetchOptions};

use super::{load_playlist, report_failed_pages};

/// Dumps the complete playlist snapshot, stats included, as pretty JSON.
pub async fn raw(playlist: String) {
    let playlist_info = load_playlist(&playlist, FetchOptions::default()).await;
    report_failed_pages(&playlist_info);

    match serde_json::to_string_pretty(&playlist_info) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Cannot serialize playlist: {}", e),
    }
}
