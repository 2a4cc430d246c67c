//! Error types for the playlist statistics pipeline.

use reqwest::StatusCode;

/// Result type alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can surface from configuration, the Spotify API or the CLI.
///
/// Only authentication failures, configuration problems and a failed playlist
/// metadata lookup abort a fetch. Failed track pages and enrichment batches are
/// absorbed where they happen (see [`crate::types::PlaylistInfo::failed_pages`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client-credentials exchange did not produce a token
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A request that cannot be degraded returned a non-success status
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },

    #[error("{0} must be set")]
    MissingConfig(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },

    /// The playlist argument is neither an id, a playlist URL nor a playlist URI
    #[error("invalid playlist reference: {0}")]
    InvalidPlaylist(String),

    #[error("operation cancelled")]
    Cancelled,
}
