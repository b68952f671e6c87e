//! Song submission and blacklist management.
//!
//! Participants submit songs anonymously by playlist code. Hosts review them
//! through the coordinator and maintain a per-playlist blacklist.

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{playlist::PlaylistRepository, song::SongRepository},
    error::AppError,
    model::song::{
        track_id_from_uri, Song, SongDecision, SongDecisionParams, SongStatus, SubmitSongParams,
    },
    service::{
        coordinator::PlaylistMutationCoordinator,
        playlist::{find_config, find_owned_playlist},
        token::TokenRefreshGuard,
    },
    spotify::SpotifyProvider,
    util::deadline::with_deadline,
};

pub struct SongService<'a> {
    db: &'a DatabaseConnection,
    provider: &'a dyn SpotifyProvider,
    token_skew: Duration,
}

impl<'a> SongService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        provider: &'a dyn SpotifyProvider,
        token_skew: Duration,
    ) -> Self {
        Self {
            db,
            provider,
            token_skew,
        }
    }

    /// Submits a song to the playlist identified by its join code.
    ///
    /// The song is stored as pending. When the playlist does not require
    /// approval it is accepted right away on the host's behalf; if that fails
    /// the song stays pending for the host to review.
    ///
    /// # Arguments
    /// - `params` - Playlist code and Spotify track URI
    /// - `deadline` - Time allowed for the whole submission
    ///
    /// # Returns
    /// - `Ok(Song)` - Stored song, pending or accepted
    /// - `Err(AppError::Validation)` - Invalid URI, blacklisted song, full playlist
    ///   or explicit track on a clean playlist
    /// - `Err(AppError::NotFound)` - No playlist with that code
    /// - `Err(AppError::Conflict)` - Song was already submitted
    /// - `Err(AppError::ProviderErr)` - Explicit content check failed
    /// - `Err(AppError::ServiceUnavailable)` - Deadline elapsed
    pub async fn submit(
        &self,
        params: SubmitSongParams,
        deadline: std::time::Duration,
    ) -> Result<Song, AppError> {
        with_deadline(deadline, self.run_submission(params)).await
    }

    async fn run_submission(&self, params: SubmitSongParams) -> Result<Song, AppError> {
        let track_id = track_id_from_uri(&params.song_uri)?;

        let playlist = PlaylistRepository::new(self.db)
            .find_by_code(&params.playlist_code.to_ascii_uppercase())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No playlist with code {}", params.playlist_code))
            })?;
        let config = find_config(self.db, playlist.id).await?;

        let song_repo = SongRepository::new(self.db);
        if let Some(existing) = song_repo
            .find_by_playlist_and_uri(playlist.id, &params.song_uri)
            .await?
        {
            if existing.blacklisted {
                return Err(AppError::Validation(
                    "Song is blacklisted on this playlist".to_string(),
                ));
            }
            return Err(AppError::Conflict(
                "Song has already been submitted".to_string(),
            ));
        }

        if song_repo.count_active(playlist.id).await? >= config.max_songs as u64 {
            return Err(AppError::Validation("Playlist is full".to_string()));
        }

        if !config.explicit {
            let guarded = TokenRefreshGuard::new(self.provider, self.token_skew)
                .ensure_valid(self.db, playlist.owner_id)
                .await?;
            let track = self
                .provider
                .track(&guarded.token.access_token, track_id)
                .await?;

            if track.explicit {
                return Err(AppError::Validation(
                    "Explicit songs are not allowed on this playlist".to_string(),
                ));
            }
        }

        let song = song_repo
            .insert(playlist.id, &params.song_uri, SongStatus::Pending, false)
            .await?;

        if config.require_approval {
            return Ok(song);
        }

        let coordinator = PlaylistMutationCoordinator::new(self.db, self.provider, self.token_skew);
        let decision = coordinator
            .run_decision(SongDecisionParams {
                playlist_id: playlist.id,
                song_uri: song.uri.clone(),
                decision: SongDecision::Accept,
                user_id: playlist.owner_id,
            })
            .await;

        match decision {
            Ok(outcome) => Ok(outcome.song),
            Err(e) => {
                tracing::warn!(
                    playlist_id = playlist.id,
                    uri = %song.uri,
                    "Automatic acceptance failed, song left pending: {}",
                    e
                );
                Ok(song)
            }
        }
    }

    /// Lists the songs of one of the user's playlists, optionally by status.
    pub async fn list(
        &self,
        user_id: i32,
        playlist_id: i32,
        status: Option<SongStatus>,
    ) -> Result<Vec<Song>, AppError> {
        find_owned_playlist(self.db, user_id, playlist_id).await?;

        SongRepository::new(self.db)
            .list_by_playlist(playlist_id, status, None)
            .await
    }

    /// Lists the blacklisted songs of one of the user's playlists.
    pub async fn list_blacklist(&self, user_id: i32, playlist_id: i32) -> Result<Vec<Song>, AppError> {
        find_owned_playlist(self.db, user_id, playlist_id).await?;

        SongRepository::new(self.db)
            .list_by_playlist(playlist_id, None, Some(true))
            .await
    }

    /// Blacklists a song, blocking future submissions of it.
    ///
    /// A song that was never submitted is recorded as a pending, blacklisted row.
    /// Blacklisting an already blacklisted song returns it unchanged.
    pub async fn blacklist(
        &self,
        user_id: i32,
        playlist_id: i32,
        song_uri: &str,
    ) -> Result<Song, AppError> {
        track_id_from_uri(song_uri)?;
        find_owned_playlist(self.db, user_id, playlist_id).await?;

        let song_repo = SongRepository::new(self.db);
        match song_repo.find_by_playlist_and_uri(playlist_id, song_uri).await? {
            Some(song) if song.blacklisted => Ok(song),
            Some(song) => song_repo.set_blacklisted(song.id, true).await,
            None => {
                song_repo
                    .insert(playlist_id, song_uri, SongStatus::Pending, true)
                    .await
            }
        }
    }

    /// Removes a song from the blacklist.
    ///
    /// # Returns
    /// - `Ok(Song)` - Song with the blacklist flag cleared
    /// - `Err(AppError::NotFound)` - Song is not blacklisted on this playlist
    pub async fn remove_from_blacklist(
        &self,
        user_id: i32,
        playlist_id: i32,
        song_uri: &str,
    ) -> Result<Song, AppError> {
        find_owned_playlist(self.db, user_id, playlist_id).await?;

        let song_repo = SongRepository::new(self.db);
        match song_repo.find_by_playlist_and_uri(playlist_id, song_uri).await? {
            Some(song) if song.blacklisted => song_repo.set_blacklisted(song.id, false).await,
            _ => Err(AppError::NotFound(
                "Song is not blacklisted on this playlist".to_string(),
            )),
        }
    }
}
