use colored::{Color, Colorize};

use crate::{spotify::FetchOptions, success, utils, warning};

use super::{load_playlist, report_failed_batches, report_failed_pages};

const CHART_WIDTH: usize = 40;

/// Prints bar charts of the `top` most frequent artists, labels and genres.
///
/// Labels and genres come from the album/artist lookups; with `enrich` off
/// every track falls under the `Unknown` label and the genre chart is empty.
pub async fn stats(playlist: String, top: usize, enrich: bool) {
    let playlist_info = load_playlist(&playlist, FetchOptions { enrich }).await;
    let stats = &playlist_info.stats;

    success!(
        "{}: {} tracks, {}",
        playlist_info.name,
        stats.number_of_tracks,
        stats.total_duration
    );

    print_chart("Artists", &stats.artists_sorted_by_appearance, top, Color::Blue);
    print_chart("Labels", &stats.labels_sorted_by_appearance, top, Color::Magenta);
    print_chart("Genres", &stats.genres_sorted_by_appearance, top, Color::Green);

    report_failed_pages(&playlist_info);
    report_failed_batches(&playlist_info);
}

fn print_chart(title: &str, data: &[(String, usize)], top: usize, color: Color) {
    println!("\n{}", title.bold());

    if data.is_empty() {
        warning!("No {} to show.", title.to_lowercase());
        return;
    }

    let shown = &data[..data.len().min(top)];
    for line in utils::render_bar_chart(shown, CHART_WIDTH) {
        println!("{}", line.color(color));
    }
}
