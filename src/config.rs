//! Configuration management for the Spotify playlist statistics CLI.
//!
//! Values come from environment variables, optionally populated from a `.env`
//! file in the local data directory. Everything the library needs is gathered
//! into an explicit [`Config`] that is handed to [`crate::spotify::SpotifyClient`];
//! nothing reads the environment after that point.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Defaults for everything except the client credentials

use std::{env, path::PathBuf, time::Duration};

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_PAGE_CONCURRENCY: usize = 8;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
const API_URL_VAR: &str = "SPOTIFY_API_URL";
const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
const PAGE_CONCURRENCY_VAR: &str = "SPSTATS_PAGE_CONCURRENCY";
const REQUEST_TIMEOUT_VAR: &str = "SPSTATS_REQUEST_TIMEOUT_SECS";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `spstats/.env`:
/// - Linux: `~/.local/share/spstats/.env`
/// - macOS: `~/Library/Application Support/spstats/.env`
/// - Windows: `%LOCALAPPDATA%/spstats/.env`
///
/// A missing file is not an error, since the variables may already be set in
/// the process environment. A file that exists but cannot be parsed is.
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map(|_| ())
        .map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spstats/.env");
    path
}

/// Runtime configuration for talking to the Spotify Web API.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Base URL of the Web API, without trailing slash
    pub api_url: String,
    /// Client-credentials token endpoint
    pub token_url: String,
    /// Upper bound on simultaneous requests within one paginated or batched
    /// stream. Enrichment runs its album and artist streams side by side, each
    /// under this bound.
    pub page_concurrency: usize,
    /// Timeout applied to every single HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a configuration with the given credentials and default endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            page_concurrency: DEFAULT_PAGE_CONCURRENCY,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingConfig`] if a client credential is unset or empty
    /// - [`Error::InvalidConfig`] if a numeric setting does not parse or the
    ///   concurrency limit or the timeout is zero
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(Error::MissingConfig(key))
        };

        let mut config = Self::new(required(CLIENT_ID_VAR)?, required(CLIENT_SECRET_VAR)?);

        if let Some(api_url) = lookup(API_URL_VAR).filter(|v| !v.is_empty()) {
            config.api_url = api_url.trim_end_matches('/').to_string();
        }
        if let Some(token_url) = lookup(TOKEN_URL_VAR).filter(|v| !v.is_empty()) {
            config.token_url = token_url;
        }

        if let Some(raw) = lookup(PAGE_CONCURRENCY_VAR) {
            config.page_concurrency = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(Error::InvalidConfig {
                        key: PAGE_CONCURRENCY_VAR,
                        value: raw,
                    });
                }
            };
        }

        if let Some(raw) = lookup(REQUEST_TIMEOUT_VAR) {
            config.request_timeout = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(Error::InvalidConfig {
                        key: REQUEST_TIMEOUT_VAR,
                        value: raw,
                    });
                }
            };
        }

        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn with_page_concurrency(mut self, page_concurrency: usize) -> Self {
        self.page_concurrency = page_concurrency.max(1);
        self
    }

    /// A zero timeout is raised to one millisecond.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout.max(Duration::from_millis(1));
        self
    }
}
