use std::collections::HashSet;

use crate::{
    error::{Error, Result},
    types::{Track, TrackSortKey},
};

/// Number of items requested per playlist tracks page.
pub const PAGE_LIMIT: u32 = 100;

const BAR_CHAR: char = '█';

/// Formats a track length as `XmYs`.
pub fn convert_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{minutes}m{seconds}s")
}

/// Formats a total length as `HhMmSs`, dropping the hour segment when it is zero.
pub fn convert_duration_total(duration_ms: u64) -> String {
    let hours = duration_ms / 3_600_000;
    let minutes = (duration_ms % 3_600_000) / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else {
        format!("{minutes}m{seconds}s")
    }
}

/// Offsets of the pages that follow the first one for a playlist of `total` items.
pub fn remaining_page_offsets(total: u32) -> Vec<u32> {
    let remaining = total.saturating_sub(1) / PAGE_LIMIT;
    (1..=remaining).map(|page| page * PAGE_LIMIT).collect()
}

/// Extracts a playlist id from a bare id, an `open.spotify.com` URL or a
/// `spotify:playlist:` URI.
pub fn parse_playlist_id(input: &str) -> Result<String> {
    let trimmed = input.trim();

    let candidate = if let Some(rest) = trimmed.strip_prefix("spotify:playlist:") {
        rest
    } else if let Some(pos) = trimmed.find("/playlist/") {
        let rest = &trimmed[pos + "/playlist/".len()..];
        rest.split(['?', '#', '/']).next().unwrap_or_default()
    } else {
        trimmed
    };

    if candidate.is_empty() || !candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidPlaylist(input.to_string()));
    }

    Ok(candidate.to_string())
}

/// Removes duplicates while keeping the first occurrence of every id.
pub fn dedup_ids<'a, I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect()
}

pub fn sort_tracks(tracks: &mut [Track], key: TrackSortKey, descending: bool) {
    tracks.sort_by(|a, b| {
        let ordering = match key {
            TrackSortKey::Name => a.name.cmp(&b.name),
            TrackSortKey::Artists => a.artists.cmp(&b.artists),
            TrackSortKey::Popularity => a.popularity.cmp(&b.popularity),
            TrackSortKey::Duration => a.duration_ms.cmp(&b.duration_ms),
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Renders `(label, count)` pairs as horizontal bars scaled to `width` columns.
///
/// The largest count gets the full width; every non-zero count gets at least one
/// block. Labels are padded to the longest label so the bars line up.
pub fn render_bar_chart(data: &[(String, usize)], width: usize) -> Vec<String> {
    let max = data.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let label_width = data
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    data.iter()
        .map(|(label, count)| {
            let len = if max == 0 {
                0
            } else {
                (count * width / max).max(usize::from(*count > 0))
            };
            format!(
                "{label:<label_width$} {bar} {count}",
                bar = BAR_CHAR.to_string().repeat(len)
            )
        })
        .collect()
}
