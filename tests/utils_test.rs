use spstats::types::{Track, TrackSortKey};
use spstats::utils::*;
use spstats::Error;

// Helper function to create a test track
fn create_test_track(name: &str, artists: &str, popularity: u32, duration_ms: u64) -> Track {
    Track {
        name: name.to_string(),
        artists: artists.to_string(),
        popularity,
        duration: convert_duration(duration_ms),
        duration_ms,
        album_id: format!("{}_album", name),
        artist_ids: vec![format!("{}_artist", name)],
        album_cover: String::new(),
        album_name: "Album".to_string(),
        is_local: false,
        label: None,
        genres: None,
    }
}

fn names(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_convert_duration() {
    assert_eq!(convert_duration(0), "0m0s");
    assert_eq!(convert_duration(61_000), "1m1s");
    // Truncates instead of rounding
    assert_eq!(convert_duration(205_999), "3m25s");
    // Track durations never get an hour segment
    assert_eq!(convert_duration(3_661_000), "61m1s");
}

#[test]
fn test_convert_duration_total() {
    assert_eq!(convert_duration_total(3_661_000), "1h1m1s");
    assert_eq!(convert_duration_total(61_000), "1m1s");
    assert_eq!(convert_duration_total(0), "0m0s");
    assert_eq!(convert_duration_total(3_600_000), "1h0m0s");
    assert_eq!(convert_duration_total(59_999), "0m59s");
}

#[test]
fn test_remaining_page_offsets() {
    assert!(remaining_page_offsets(0).is_empty());
    assert!(remaining_page_offsets(50).is_empty());
    assert!(remaining_page_offsets(100).is_empty());
    assert_eq!(remaining_page_offsets(101), vec![100]);
    assert_eq!(remaining_page_offsets(250), vec![100, 200]);
    assert_eq!(remaining_page_offsets(300), vec![100, 200]);
}

#[test]
fn test_parse_playlist_id() {
    let id = "37i9dQZF1DXcBWIGoYBM5M";

    assert_eq!(parse_playlist_id(id).unwrap(), id);
    assert_eq!(parse_playlist_id(&format!("  {id}\n")).unwrap(), id);
    assert_eq!(
        parse_playlist_id(&format!("https://open.spotify.com/playlist/{id}?si=abc123")).unwrap(),
        id
    );
    assert_eq!(
        parse_playlist_id(&format!("https://open.spotify.com/intl-de/playlist/{id}")).unwrap(),
        id
    );
    assert_eq!(
        parse_playlist_id(&format!("spotify:playlist:{id}")).unwrap(),
        id
    );
}

#[test]
fn test_parse_playlist_id_rejects_garbage() {
    for input in ["", "   ", "https://open.spotify.com/playlist/", "abc/def", "id with spaces"] {
        match parse_playlist_id(input) {
            Err(Error::InvalidPlaylist(raw)) => assert_eq!(raw, input),
            other => panic!("expected InvalidPlaylist for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_dedup_ids_keeps_first_occurrence() {
    let ids: Vec<String> = ["b", "a", "b", "c", "a"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(dedup_ids(&ids), vec!["b", "a", "c"]);
}

#[test]
fn test_sort_tracks() {
    let mut tracks = vec![
        create_test_track("Banana", "Zed", 10, 300_000),
        create_test_track("Apple", "Yan", 90, 100_000),
        create_test_track("Cherry", "Abe", 50, 200_000),
    ];

    sort_tracks(&mut tracks, TrackSortKey::Name, false);
    assert_eq!(names(&tracks), vec!["Apple", "Banana", "Cherry"]);

    sort_tracks(&mut tracks, TrackSortKey::Artists, false);
    assert_eq!(names(&tracks), vec!["Cherry", "Apple", "Banana"]);

    sort_tracks(&mut tracks, TrackSortKey::Popularity, true);
    assert_eq!(names(&tracks), vec!["Apple", "Cherry", "Banana"]);

    sort_tracks(&mut tracks, TrackSortKey::Duration, false);
    assert_eq!(names(&tracks), vec!["Apple", "Cherry", "Banana"]);
}

#[test]
fn test_sort_tracks_duration_is_numeric() {
    // "10m0s" < "9m0s" as strings, but not as durations
    let mut tracks = vec![
        create_test_track("Long", "A", 0, 600_000),
        create_test_track("Short", "B", 0, 540_000),
    ];

    sort_tracks(&mut tracks, TrackSortKey::Duration, false);
    assert_eq!(names(&tracks), vec!["Short", "Long"]);
}

#[test]
fn test_render_bar_chart() {
    let data = vec![
        ("Artist A".to_string(), 4),
        ("B".to_string(), 2),
        ("C".to_string(), 1),
    ];

    let lines = render_bar_chart(&data, 8);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Artist A ████████ 4");
    assert_eq!(lines[1], "B        ████ 2");
    assert_eq!(lines[2], "C        ██ 1");
}

#[test]
fn test_render_bar_chart_small_counts_stay_visible() {
    let data = vec![("Big".to_string(), 1000), ("Tiny".to_string(), 1)];

    let lines = render_bar_chart(&data, 10);

    assert!(lines[1].contains('█'));
    assert!(render_bar_chart(&[], 10).is_empty());
}
