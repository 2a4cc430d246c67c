use std::collections::HashMap;

use futures::{StreamExt, stream};
use serde::de::DeserializeOwned;

use crate::{
    error::Result,
    types::{
        Enrichment, FailedBatches, GetSeveralAlbumsResponse, GetSeveralArtistsResponse,
        LOCAL_ARTIST, Track, UNKNOWN,
    },
    utils,
};

use super::SpotifyClient;

/// Maximum ids accepted by `GET /albums`.
pub const ALBUM_BATCH_SIZE: usize = 20;

/// Maximum ids accepted by `GET /artists`.
pub const ARTIST_BATCH_SIZE: usize = 50;

impl SpotifyClient {
    /// Looks up label and name for a set of albums.
    ///
    /// Returns `(album -> label, album -> name)`. Sentinel ids are never sent;
    /// if [`LOCAL_ARTIST`] was among the inputs it is mapped to itself in both
    /// results. An input without catalog ids issues no request.
    ///
    /// A batch answered with a non-success status contributes nothing. When
    /// every batch fails, both maps are empty.
    pub async fn fetch_album_details(
        &self,
        album_ids: &[String],
        token: &str,
    ) -> (HashMap<String, String>, HashMap<String, String>) {
        let (labels, names, _) = self.album_details(album_ids, token).await;
        (labels, names)
    }

    /// Looks up the genres of a set of artists.
    ///
    /// Same batching and sentinel rules as [`Self::fetch_album_details`];
    /// [`LOCAL_ARTIST`] maps to a single `LOCAL_ARTIST` genre.
    pub async fn fetch_artist_genres(
        &self,
        artist_ids: &[String],
        token: &str,
    ) -> HashMap<String, Vec<String>> {
        self.artist_genres(artist_ids, token).await.0
    }

    /// Fetches labels and genres for `tracks` and writes them onto the tracks.
    ///
    /// Returns how many lookup batches failed. Tracks covered by a failed
    /// album batch keep no label; those of a failed artist batch get no genres.
    pub async fn enrich_tracks(&self, tracks: &mut [Track], token: &str) -> FailedBatches {
        let album_ids: Vec<String> = tracks.iter().map(|t| t.album_id.clone()).collect();
        let artist_ids: Vec<String> = tracks
            .iter()
            .flat_map(|t| t.artist_ids.iter().cloned())
            .collect();

        let (
            (album_labels, album_names, failed_albums),
            (artist_genres, failed_artists),
        ) = tokio::join!(
            self.album_details(&album_ids, token),
            self.artist_genres(&artist_ids, token)
        );

        apply_enrichment(
            tracks,
            &Enrichment {
                album_labels,
                album_names,
                artist_genres,
            },
        );

        FailedBatches {
            albums: failed_albums,
            artists: failed_artists,
        }
    }

    async fn album_details(
        &self,
        album_ids: &[String],
        token: &str,
    ) -> (HashMap<String, String>, HashMap<String, String>, usize) {
        let ids = catalog_ids(album_ids);
        if ids.is_empty() {
            return (HashMap::new(), HashMap::new(), 0);
        }

        let url = self.api_url("/albums");
        let batches: Vec<Result<GetSeveralAlbumsResponse>> =
            self.fetch_batches(&url, token, &ids, ALBUM_BATCH_SIZE).await;
        let total = batches.len();
        let failed = batches.iter().filter(|batch| batch.is_err()).count();

        if failed == total {
            return (HashMap::new(), HashMap::new(), failed);
        }

        let mut labels = HashMap::new();
        let mut names = HashMap::new();
        for batch in batches.into_iter().flatten() {
            for album in batch.albums.into_iter().flatten() {
                labels.insert(album.id.clone(), non_empty_or_unknown(album.label));
                names.insert(album.id, non_empty_or_unknown(album.name));
            }
        }

        if contains_local(album_ids) {
            labels.insert(LOCAL_ARTIST.to_string(), LOCAL_ARTIST.to_string());
            names.insert(LOCAL_ARTIST.to_string(), LOCAL_ARTIST.to_string());
        }

        (labels, names, failed)
    }

    async fn artist_genres(
        &self,
        artist_ids: &[String],
        token: &str,
    ) -> (HashMap<String, Vec<String>>, usize) {
        let ids = catalog_ids(artist_ids);
        if ids.is_empty() {
            return (HashMap::new(), 0);
        }

        let url = self.api_url("/artists");
        let batches: Vec<Result<GetSeveralArtistsResponse>> =
            self.fetch_batches(&url, token, &ids, ARTIST_BATCH_SIZE).await;
        let total = batches.len();
        let failed = batches.iter().filter(|batch| batch.is_err()).count();

        if failed == total {
            return (HashMap::new(), failed);
        }

        let mut genres = HashMap::new();
        for batch in batches.into_iter().flatten() {
            for artist in batch.artists.into_iter().flatten() {
                genres.insert(artist.id, artist.genres.unwrap_or_default());
            }
        }

        if contains_local(artist_ids) {
            genres.insert(LOCAL_ARTIST.to_string(), vec![LOCAL_ARTIST.to_string()]);
        }

        (genres, failed)
    }

    async fn fetch_batches<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        ids: &[String],
        batch_size: usize,
    ) -> Vec<Result<T>> {
        stream::iter(ids.chunks(batch_size))
            .map(|chunk| async move {
                let query = [("ids", chunk.join(","))];
                self.get_json::<T>(url, token, &query).await
            })
            .buffered(self.config.page_concurrency.max(1))
            .collect()
            .await
    }
}

/// Writes album labels and artist genres onto tracks.
///
/// - `label` is the label of the track's album, `None` if unknown
/// - `genres` is every genre of the track's artists, first occurrence kept
/// - an `"Unknown"` album name is replaced when the album lookup knows better
pub fn apply_enrichment(tracks: &mut [Track], enrichment: &Enrichment) {
    for track in tracks {
        track.label = enrichment.album_labels.get(&track.album_id).cloned();

        if track.album_name == UNKNOWN {
            if let Some(name) = enrichment.album_names.get(&track.album_id) {
                track.album_name = name.clone();
            }
        }

        let mut genres: Vec<String> = Vec::new();
        for genre in track
            .artist_ids
            .iter()
            .filter_map(|id| enrichment.artist_genres.get(id))
            .flatten()
        {
            if !genres.contains(genre) {
                genres.push(genre.clone());
            }
        }
        track.genres = Some(genres);
    }
}

fn catalog_ids(ids: &[String]) -> Vec<String> {
    utils::dedup_ids(
        ids.iter()
            .filter(|id| !id.is_empty() && id.as_str() != LOCAL_ARTIST && id.as_str() != UNKNOWN),
    )
}

fn contains_local(ids: &[String]) -> bool {
    ids.iter().any(|id| id == LOCAL_ARTIST)
}

fn non_empty_or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
