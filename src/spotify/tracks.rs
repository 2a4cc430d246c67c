use futures::{StreamExt, stream};

use crate::{
    error::Result,
    types::{
        LOCAL_ARTIST, PlaylistItem, PlaylistTracksPage, RawTrack, Track, TrackFetch, UNKNOWN,
    },
    utils::{self, PAGE_LIMIT},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves every track of a playlist in playlist order.
    ///
    /// The first page doubles as the page probe: its `total` decides how many
    /// more pages exist. Those are requested concurrently, at most
    /// `config.page_concurrency` at a time, and appended in ascending offset
    /// order whatever order the responses arrive in.
    ///
    /// # Failure Handling
    ///
    /// - probe fails: the result is empty and `failed_pages` is `[0]`
    /// - any later page fails: that page contributes nothing, its offset is
    ///   pushed to `failed_pages`, the other pages are unaffected
    ///
    /// Items whose `track` is null (removed or unavailable tracks) are dropped.
    /// Offsets come from `total`, so dropped items never shift pagination.
    pub async fn get_all_tracks(&self, playlist_id: &str, token: &str) -> TrackFetch {
        let url = self.api_url(&format!("/playlists/{playlist_id}/tracks"));

        let probe = match self.fetch_tracks_page(&url, token, 0).await {
            Ok(page) => page,
            Err(_) => {
                return TrackFetch {
                    tracks: Vec::new(),
                    failed_pages: vec![0],
                };
            }
        };

        let mut fetch = TrackFetch {
            tracks: normalize_items(probe.items),
            failed_pages: Vec::new(),
        };

        let url = &url;
        let pages: Vec<(u32, Result<PlaylistTracksPage>)> =
            stream::iter(utils::remaining_page_offsets(probe.total))
                .map(|offset| async move {
                    (offset, self.fetch_tracks_page(url, token, offset).await)
                })
                .buffered(self.config.page_concurrency.max(1))
                .collect()
                .await;

        for (offset, page) in pages {
            match page {
                Ok(page) => fetch.tracks.extend(normalize_items(page.items)),
                Err(_) => fetch.failed_pages.push(offset),
            }
        }

        fetch
    }

    async fn fetch_tracks_page(
        &self,
        url: &str,
        token: &str,
        offset: u32,
    ) -> Result<PlaylistTracksPage> {
        let query = [
            ("limit", PAGE_LIMIT.to_string()),
            ("offset", offset.to_string()),
        ];
        self.get_json(url, token, &query).await
    }
}

fn normalize_items(items: Vec<PlaylistItem>) -> Vec<Track> {
    items
        .into_iter()
        .filter_map(|item| item.track)
        .map(normalize_track)
        .collect()
}

/// Converts a raw catalog track into a [`Track`].
///
/// Local files have no catalog identity, so their album id, artists and
/// artist ids are all set to [`LOCAL_ARTIST`]. Missing names fall back to
/// [`UNKNOWN`], missing numbers to zero and a missing cover to `""`.
pub fn normalize_track(raw: RawTrack) -> Track {
    let is_local = raw.is_local.unwrap_or(false);
    let duration_ms = raw.duration_ms.unwrap_or(0);
    let album = raw.album;

    let (album_id, artists, artist_ids) = if is_local {
        (
            LOCAL_ARTIST.to_string(),
            LOCAL_ARTIST.to_string(),
            vec![LOCAL_ARTIST.to_string()],
        )
    } else {
        let album_id = album
            .as_ref()
            .and_then(|a| a.id.clone())
            .unwrap_or_else(|| UNKNOWN.to_string());
        let raw_artists = raw.artists.unwrap_or_default();

        if raw_artists.is_empty() {
            (album_id, UNKNOWN.to_string(), vec![UNKNOWN.to_string()])
        } else {
            let names = raw_artists
                .iter()
                .map(|a| a.name.as_deref().unwrap_or(UNKNOWN))
                .collect::<Vec<_>>()
                .join(", ");
            let ids = raw_artists
                .into_iter()
                .map(|a| a.id.unwrap_or_else(|| UNKNOWN.to_string()))
                .collect();
            (album_id, names, ids)
        }
    };

    let album_cover = album
        .as_ref()
        .and_then(|a| a.images.as_ref())
        .and_then(|images| images.first())
        .map(|image| image.url.clone())
        .unwrap_or_default();

    let album_name = album
        .and_then(|a| a.name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    Track {
        name: raw
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        artists,
        popularity: raw.popularity.unwrap_or(0),
        duration: utils::convert_duration(duration_ms),
        duration_ms,
        album_id,
        artist_ids,
        album_cover,
        album_name,
        is_local,
        label: None,
        genres: None,
    }
}
