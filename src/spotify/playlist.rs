use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::{
    error::{Error, Result},
    stats::calculate_stats,
    types::{FailedBatches, PlaylistInfo, PlaylistResponse, PlaylistStats, Track, TrackFetch},
};

use super::SpotifyClient;

/// Knobs for a single playlist fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Look up album labels and artist genres before aggregating
    pub enrich: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { enrich: true }
    }
}

impl SpotifyClient {
    /// Fetches metadata, tracks and statistics of a playlist.
    ///
    /// Runs the whole pipeline with a freshly requested token:
    /// 1. client-credentials token exchange
    /// 2. playlist metadata
    /// 3. all track pages
    /// 4. album/artist enrichment, if `options.enrich`
    /// 5. aggregation
    ///
    /// # Errors
    ///
    /// - [`Error::Authentication`] when no token could be obtained
    /// - [`Error::Status`] / [`Error::Http`] when the metadata lookup fails
    ///
    /// Failed track pages and lookup batches do not error; they show up in
    /// [`PlaylistInfo::failed_pages`] and [`PlaylistInfo::failed_batches`].
    pub async fn get_playlist_info(
        &self,
        playlist_id: &str,
        options: &FetchOptions,
    ) -> Result<PlaylistInfo> {
        let token = self.request_token().await?;

        let url = self.api_url(&format!("/playlists/{playlist_id}"));
        let playlist: PlaylistResponse = self.get_json(&url, &token, &[]).await?;

        let TrackFetch {
            mut tracks,
            failed_pages,
        } = self.get_all_tracks(playlist_id, &token).await;

        let failed_batches = if options.enrich {
            self.enrich_tracks(&mut tracks, &token).await
        } else {
            FailedBatches::default()
        };

        let stats = calculate_stats(&tracks);

        Ok(build_playlist_info(
            playlist_id,
            playlist,
            tracks,
            stats,
            failed_pages,
            failed_batches,
        ))
    }

    /// Same as [`Self::get_playlist_info`], aborted as soon as `cancel` fires.
    ///
    /// Cancelling drops the pipeline future, and with it the token request,
    /// the page probe and every in-flight page or batch request. Nothing
    /// partial is returned: the result is [`Error::Cancelled`].
    pub async fn get_playlist_info_cancellable(
        &self,
        playlist_id: &str,
        options: &FetchOptions,
        cancel: &CancellationToken,
    ) -> Result<PlaylistInfo> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            result = self.get_playlist_info(playlist_id, options) => result,
        }
    }
}

fn build_playlist_info(
    playlist_id: &str,
    playlist: PlaylistResponse,
    tracks: Vec<Track>,
    stats: PlaylistStats,
    failed_pages: Vec<u32>,
    failed_batches: FailedBatches,
) -> PlaylistInfo {
    let (owner, owner_image) = match playlist.owner {
        Some(owner) => (
            owner.display_name.unwrap_or_default(),
            owner
                .images
                .and_then(|images| images.into_iter().next())
                .map(|image| image.url)
                .unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    PlaylistInfo {
        id: playlist_id.to_string(),
        name: playlist.name.unwrap_or_default(),
        description: playlist.description.unwrap_or_default(),
        followers: playlist
            .followers
            .and_then(|followers| followers.total)
            .unwrap_or(0),
        url: playlist
            .external_urls
            .and_then(|urls| urls.spotify)
            .unwrap_or_default(),
        owner,
        owner_image,
        image: playlist
            .images
            .and_then(|images| images.into_iter().next())
            .map(|image| image.url)
            .unwrap_or_default(),
        tracks,
        stats,
        failed_pages,
        failed_batches,
        fetched_at: Utc::now(),
    }
}
