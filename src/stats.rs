//! Aggregation of normalized tracks into playlist statistics.
//!
//! Everything here is pure: the same track order always produces the same
//! [`PlaylistStats`].

use std::collections::HashMap;

use crate::{
    types::{PlaylistStats, Track, UNKNOWN},
    utils,
};

/// Counts occurrences while remembering the order keys were first seen.
#[derive(Debug, Default)]
struct Counter {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Counter {
    fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Count descending; `sort_by` is stable so ties stay in first-seen order.
    fn sorted_by_appearance(mut self) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}

/// Builds the statistics for an ordered list of tracks.
///
/// - artists are split on `", "` so every co-artist is counted once per track
/// - tracks without a label are counted under `"Unknown"`
/// - tracks without genres do not contribute to the genre breakdown
pub fn calculate_stats(tracks: &[Track]) -> PlaylistStats {
    let total_duration_ms: u64 = tracks.iter().map(|t| t.duration_ms).sum();

    let mut artists = Counter::default();
    let mut labels = Counter::default();
    let mut genres = Counter::default();

    for track in tracks {
        for artist in track.artists.split(", ") {
            artists.add(artist);
        }

        labels.add(track.label.as_deref().unwrap_or(UNKNOWN));

        for genre in track.genres.iter().flatten() {
            genres.add(genre);
        }
    }

    PlaylistStats {
        number_of_tracks: tracks.len(),
        total_duration: utils::convert_duration_total(total_duration_ms),
        artists_sorted_by_appearance: artists.sorted_by_appearance(),
        labels_sorted_by_appearance: labels.sorted_by_appearance(),
        genres_sorted_by_appearance: genres.sorted_by_appearance(),
    }
}
