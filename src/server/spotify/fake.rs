//! In-memory Spotify provider for tests.

use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use crate::server::{
    error::provider::ProviderError,
    spotify::{NewSpotifyPlaylist, ProviderToken, SpotifyProfile, SpotifyProvider, SpotifyTrack},
};

/// Records every call and fails on demand.
///
/// Refreshed tokens are `refreshed_access_<n>` / `refreshed_refresh_<n>` with a
/// one hour lifetime, where `n` is the refresh call number.
#[derive(Default)]
pub struct FakeSpotify {
    pub refresh_calls: AtomicUsize,
    pub add_track_calls: AtomicUsize,
    pub create_playlist_calls: AtomicUsize,
    pub track_calls: AtomicUsize,
    pub fail_refresh: AtomicBool,
    pub fail_add_tracks: AtomicBool,
    pub fail_create_playlist: AtomicBool,
    /// Whether `track()` reports tracks as explicit.
    pub explicit_tracks: AtomicBool,
    /// Whether refresh responses omit the refresh token.
    pub omit_refresh_token: AtomicBool,
    /// Delay applied before answering `add_tracks` and `create_playlist`.
    pub delay: Mutex<Option<Duration>>,
    /// `(access_token, spotify_playlist_id, uris)` for each `add_tracks` call.
    pub added: Mutex<Vec<(String, String, Vec<String>)>>,
    /// Access token passed to each `create_playlist` call.
    pub create_playlist_tokens: Mutex<Vec<String>>,
}

impl FakeSpotify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_refresh(self) -> Self {
        self.fail_refresh.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_add_tracks(self) -> Self {
        self.fail_add_tracks.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_create_playlist(self) -> Self {
        self.fail_create_playlist.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_explicit_tracks(self) -> Self {
        self.explicit_tracks.store(true, Ordering::SeqCst);
        self
    }

    pub fn without_refresh_token(self) -> Self {
        self.omit_refresh_token.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn add_track_count(&self) -> usize {
        self.add_track_calls.load(Ordering::SeqCst)
    }

    pub fn create_playlist_count(&self) -> usize {
        self.create_playlist_calls.load(Ordering::SeqCst)
    }

    pub fn track_count(&self) -> usize {
        self.track_calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn downstream(endpoint: &'static str) -> ProviderError {
        ProviderError::Status {
            endpoint,
            status: 500,
            body: "fake failure".to_string(),
        }
    }
}

#[async_trait]
impl SpotifyProvider for FakeSpotify {
    async fn exchange_code(&self, code: String) -> Result<ProviderToken, ProviderError> {
        if code == "bad-code" {
            return Err(ProviderError::TokenExchange("invalid_grant".to_string()));
        }

        Ok(ProviderToken {
            access_token: format!("access_for_{}", code),
            refresh_token: Some(format!("refresh_for_{}", code)),
            expires_in: Duration::from_secs(3600),
        })
    }

    async fn refresh_token(&self, _refresh_token: &str) -> Result<ProviderToken, ProviderError> {
        let n = self.refresh_calls.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail_refresh.load(Ordering::SeqCst) {
            return Err(ProviderError::TokenRefresh("invalid_grant".to_string()));
        }

        let refresh_token = if self.omit_refresh_token.load(Ordering::SeqCst) {
            None
        } else {
            Some(format!("refreshed_refresh_{}", n))
        };

        Ok(ProviderToken {
            access_token: format!("refreshed_access_{}", n),
            refresh_token,
            expires_in: Duration::from_secs(3600),
        })
    }

    async fn current_user(&self, access_token: &str) -> Result<SpotifyProfile, ProviderError> {
        let id = access_token.trim_start_matches("access_for_");

        Ok(SpotifyProfile {
            id: format!("spotify_{}", id),
            display_name: Some(format!("Listener {}", id)),
            email: Some(format!("{}@example.com", id)),
        })
    }

    async fn create_playlist(
        &self,
        access_token: &str,
        _spotify_user_id: &str,
        _playlist: &NewSpotifyPlaylist,
    ) -> Result<String, ProviderError> {
        let n = self.create_playlist_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.create_playlist_tokens
            .lock()
            .unwrap()
            .push(access_token.to_string());
        self.wait().await;

        if self.fail_create_playlist.load(Ordering::SeqCst) {
            return Err(Self::downstream("create_playlist"));
        }

        Ok(format!("sp_created_{}", n))
    }

    async fn add_tracks(
        &self,
        access_token: &str,
        spotify_playlist_id: &str,
        uris: &[String],
    ) -> Result<String, ProviderError> {
        let n = self.add_track_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.added.lock().unwrap().push((
            access_token.to_string(),
            spotify_playlist_id.to_string(),
            uris.to_vec(),
        ));
        self.wait().await;

        if self.fail_add_tracks.load(Ordering::SeqCst) {
            return Err(Self::downstream("add_tracks"));
        }

        Ok(format!("snapshot_{}", n))
    }

    async fn track(
        &self,
        _access_token: &str,
        track_id: &str,
    ) -> Result<SpotifyTrack, ProviderError> {
        self.track_calls.fetch_add(1, Ordering::SeqCst);

        Ok(SpotifyTrack {
            id: track_id.to_string(),
            name: format!("Track {}", track_id),
            explicit: self.explicit_tracks.load(Ordering::SeqCst),
        })
    }
}
