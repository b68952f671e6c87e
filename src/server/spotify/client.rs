//! Production Spotify provider backed by `oauth2` and `reqwest`.

use async_trait::async_trait;
use oauth2::{basic::BasicTokenResponse, AuthorizationCode, RefreshToken, TokenResponse};
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::server::{
    error::provider::ProviderError,
    spotify::{
        NewSpotifyPlaylist, ProviderToken, SpotifyProfile, SpotifyProvider, SpotifyTrack,
        DEFAULT_TOKEN_LIFETIME,
    },
    state::OAuth2Client,
};

pub struct SpotifyClient {
    http_client: reqwest::Client,
    oauth_client: OAuth2Client,
    /// Base URL of the Web API, without trailing slash.
    api_url: String,
}

#[derive(Serialize)]
struct AddTracksBody<'a> {
    uris: &'a [String],
}

#[derive(Deserialize)]
struct SnapshotResponse {
    snapshot_id: String,
}

#[derive(Deserialize)]
struct CreatedPlaylistResponse {
    id: String,
}

impl SpotifyClient {
    pub fn new(http_client: reqwest::Client, oauth_client: OAuth2Client, api_url: String) -> Self {
        Self {
            http_client,
            oauth_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sends an authenticated Web API request and decodes the JSON response.
    ///
    /// Non-success statuses become `ProviderError::Status` carrying the body
    /// Spotify returned.
    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
        access_token: &str,
    ) -> Result<T, ProviderError> {
        let response = request
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|source| ProviderError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ProviderError::Request { endpoint, source })
    }
}

fn into_provider_token(token: BasicTokenResponse) -> ProviderToken {
    ProviderToken {
        access_token: token.access_token().secret().clone(),
        refresh_token: token.refresh_token().map(|t| t.secret().clone()),
        expires_in: token.expires_in().unwrap_or(DEFAULT_TOKEN_LIFETIME),
    }
}

#[async_trait]
impl SpotifyProvider for SpotifyClient {
    async fn exchange_code(&self, code: String) -> Result<ProviderToken, ProviderError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.http_client)
            .await
            .map_err(|e| ProviderError::TokenExchange(e.to_string()))?;

        Ok(into_provider_token(token))
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<ProviderToken, ProviderError> {
        let refresh_token = RefreshToken::new(refresh_token.to_string());
        let token = self
            .oauth_client
            .exchange_refresh_token(&refresh_token)
            .request_async(&self.http_client)
            .await
            .map_err(|e| ProviderError::TokenRefresh(e.to_string()))?;

        Ok(into_provider_token(token))
    }

    async fn current_user(&self, access_token: &str) -> Result<SpotifyProfile, ProviderError> {
        let request = self.http_client.get(format!("{}/me", self.api_url));

        self.send_json("current_user", request, access_token).await
    }

    async fn create_playlist(
        &self,
        access_token: &str,
        spotify_user_id: &str,
        playlist: &NewSpotifyPlaylist,
    ) -> Result<String, ProviderError> {
        let request = self
            .http_client
            .post(format!("{}/users/{}/playlists", self.api_url, spotify_user_id))
            .json(playlist);

        let created: CreatedPlaylistResponse = self
            .send_json("create_playlist", request, access_token)
            .await?;

        Ok(created.id)
    }

    async fn add_tracks(
        &self,
        access_token: &str,
        spotify_playlist_id: &str,
        uris: &[String],
    ) -> Result<String, ProviderError> {
        let request = self
            .http_client
            .post(format!("{}/playlists/{}/tracks", self.api_url, spotify_playlist_id))
            .json(&AddTracksBody { uris });

        let snapshot: SnapshotResponse = self
            .send_json("add_tracks", request, access_token)
            .await?;

        Ok(snapshot.snapshot_id)
    }

    async fn track(
        &self,
        access_token: &str,
        track_id: &str,
    ) -> Result<SpotifyTrack, ProviderError> {
        let request = self
            .http_client
            .get(format!("{}/tracks/{}", self.api_url, track_id));

        self.send_json("track", request, access_token).await
    }
}
