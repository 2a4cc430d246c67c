//! # Spotify Integration Module
//!
//! HTTP access to the Spotify Web API for playlist statistics. All requests go
//! through one [`SpotifyClient`], which owns the shared `reqwest` connection pool
//! and the [`Config`] it was built from.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! SpotifyClient
//!     ├── auth        client-credentials token exchange
//!     ├── tracks      paginated playlist tracks, normalized
//!     ├── enrichment  album labels and artist genres by id
//!     └── playlist    metadata + tracks + stats in one call
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Failure Handling
//!
//! There are no retries. A failed token exchange aborts everything. A failed
//! track page or enrichment batch is replaced by an empty result so the rest of
//! the playlist still gets aggregated; failed page offsets are reported on
//! [`crate::types::PlaylistInfo::failed_pages`].
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - client-credentials grant
//! - `GET /playlists/{id}` - playlist metadata
//! - `GET /playlists/{id}/tracks` - playlist items, 100 per page
//! - `GET /albums?ids=` - up to 20 albums per request
//! - `GET /artists?ids=` - up to 50 artists per request

pub mod auth;
pub mod enrichment;
pub mod playlist;
pub mod tracks;

pub use enrichment::apply_enrichment;
pub use playlist::FetchOptions;
pub use tracks::normalize_track;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Client for the subset of the Web API used by the statistics pipeline.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Config,
}

impl SpotifyClient {
    /// Creates a client whose requests all use `config.request_timeout`.
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    /// Sends an authenticated GET and decodes the JSON body.
    ///
    /// Non-success statuses become [`Error::Status`] so callers can decide
    /// whether to degrade or propagate.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
