use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::AUTHORIZATION;

use crate::{
    error::{Error, Result},
    types::TokenResponse,
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Exchanges the configured client credentials for a bearer token.
    ///
    /// Performs the OAuth 2.0 client-credentials grant against
    /// `config.token_url`, authenticating with HTTP Basic auth built from
    /// `client_id:client_secret`. The token is not cached; every top-level
    /// playlist fetch asks for a new one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the request cannot be sent, the
    /// endpoint answers with a non-success status, or the body carries no
    /// `access_token`. The error never comes with a fallback token.
    pub async fn request_token(&self) -> Result<String> {
        let credentials = STANDARD.encode(format!(
            "{}:{}",
            self.config.client_id, self.config.client_secret
        ));

        let response = self
            .http
            .post(&self.config.token_url)
            .header(AUTHORIZATION, format!("Basic {credentials}"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Authentication(format!(
                "token endpoint returned status {status}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;

        body.access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Authentication("no access_token in response".to_string()))
    }
}
