//! Spotify accounts service and Web API access.
//!
//! `SpotifyProvider` is the seam between the services and Spotify. Production
//! uses `client::SpotifyClient`; tests substitute a fake that counts calls and
//! injects failures.

pub mod client;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::server::error::provider::ProviderError;

/// Access token lifetime assumed when Spotify omits `expires_in`.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// Credentials returned by a code exchange or refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderToken {
    pub access_token: String,
    /// Spotify may omit the refresh token on refresh; the previous one stays valid.
    pub refresh_token: Option<String>,
    pub expires_in: Duration,
}

impl ProviderToken {
    /// Absolute expiry of this token when it was issued at `issued_at`.
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - `issued_at` plus `expires_in`
    /// - `Err(ProviderError::InvalidExpiry)` - Lifetime does not fit a timestamp
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Result<DateTime<Utc>, ProviderError> {
        chrono::Duration::from_std(self.expires_in)
            .ok()
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or(ProviderError::InvalidExpiry(self.expires_in))
    }
}

/// The subset of the Spotify user object this backend reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpotifyProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of the create playlist request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSpotifyPlaylist {
    pub name: String,
    pub public: bool,
    pub collaborative: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    pub explicit: bool,
}

#[async_trait]
pub trait SpotifyProvider: Send + Sync {
    /// Exchanges an authorization code from the login callback for tokens.
    async fn exchange_code(&self, code: String) -> Result<ProviderToken, ProviderError>;

    /// Runs the refresh token grant.
    ///
    /// Failures are reported as `ProviderError::TokenRefresh`.
    async fn refresh_token(&self, refresh_token: &str) -> Result<ProviderToken, ProviderError>;

    /// Fetches the profile of the user owning `access_token`.
    async fn current_user(&self, access_token: &str) -> Result<SpotifyProfile, ProviderError>;

    /// Creates a playlist on the user's account and returns its Spotify id.
    async fn create_playlist(
        &self,
        access_token: &str,
        spotify_user_id: &str,
        playlist: &NewSpotifyPlaylist,
    ) -> Result<String, ProviderError>;

    /// Appends tracks to a playlist and returns the new snapshot id.
    async fn add_tracks(
        &self,
        access_token: &str,
        spotify_playlist_id: &str,
        uris: &[String],
    ) -> Result<String, ProviderError>;

    /// Fetches catalog information for a track.
    async fn track(&self, access_token: &str, track_id: &str)
        -> Result<SpotifyTrack, ProviderError>;
}
