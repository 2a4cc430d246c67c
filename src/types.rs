use std::collections::HashMap;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Placeholder id for tracks that are not part of the catalog (local files).
pub const LOCAL_ARTIST: &str = "LOCAL_ARTIST";

/// Placeholder for missing names, ids and labels.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Followers {
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistResponse {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub followers: Option<Followers>,
    pub external_urls: Option<ExternalUrls>,
    pub owner: Option<PlaylistOwner>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<RawTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTrack {
    pub name: Option<String>,
    pub album: Option<RawAlbum>,
    #[serde(default)]
    pub artists: Option<Vec<RawArtist>>,
    pub popularity: Option<u32>,
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub is_local: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAlbum {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArtist {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSeveralAlbumsResponse {
    #[serde(default)]
    pub albums: Vec<Option<AlbumDetail>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumDetail {
    pub id: String,
    pub name: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSeveralArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Option<ArtistDetail>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistDetail {
    pub id: String,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

/// A playlist track normalized into a uniform shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    /// Display names joined with `", "`
    pub artists: String,
    pub popularity: u32,
    pub duration: String,
    pub duration_ms: u64,
    pub album_id: String,
    pub artist_ids: Vec<String>,
    pub album_cover: String,
    pub album_name: String,
    pub is_local: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

/// Occurrence counts for a playlist, every breakdown ordered by count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistStats {
    pub number_of_tracks: usize,
    pub total_duration: String,
    pub artists_sorted_by_appearance: Vec<(String, usize)>,
    pub labels_sorted_by_appearance: Vec<(String, usize)>,
    pub genres_sorted_by_appearance: Vec<(String, usize)>,
}

/// Snapshot of one playlist fetch.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub followers: u64,
    pub url: String,
    pub owner: String,
    pub owner_image: String,
    pub image: String,
    pub tracks: Vec<Track>,
    pub stats: PlaylistStats,
    /// Offsets of track pages that could not be fetched
    pub failed_pages: Vec<u32>,
    pub failed_batches: FailedBatches,
    pub fetched_at: DateTime<Utc>,
}

/// Result of walking all track pages of a playlist.
#[derive(Debug, Clone, Default)]
pub struct TrackFetch {
    pub tracks: Vec<Track>,
    pub failed_pages: Vec<u32>,
}

/// Number of album and artist lookup batches that could not be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FailedBatches {
    pub albums: usize,
    pub artists: usize,
}

impl FailedBatches {
    pub fn is_empty(&self) -> bool {
        self.albums == 0 && self.artists == 0
    }
}

/// Album and artist metadata gathered by the batch endpoints.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub album_labels: HashMap<String, String>,
    pub album_names: HashMap<String, String>,
    pub artist_genres: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrackSortKey {
    Name,
    Artists,
    Popularity,
    Duration,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub popularity: u32,
    pub duration: String,
}

impl From<&Track> for TrackTableRow {
    fn from(track: &Track) -> Self {
        Self {
            name: track.name.clone(),
            artists: track.artists.clone(),
            album: track.album_name.clone(),
            popularity: track.popularity,
            duration: track.duration.clone(),
        }
    }
}
