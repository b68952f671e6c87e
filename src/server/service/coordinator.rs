//! Playlist mutation coordinator.
//!
//! Combines a local transaction with one Spotify call and decides the commit or
//! rollback boundary between them:
//!
//! 1. Open a transaction
//! 2. Load and check the local rows
//! 3. Validate the owner's token through the refresh guard, inside the transaction
//! 4. Make the Spotify call
//! 5. Write the local result and commit
//!
//! A failure at any step rolls back everything, including a token refresh made in
//! step 3. When the deadline elapses the in-flight future is dropped and the
//! transaction rolls back with it. Nothing is retried.

use chrono::Duration;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        playlist::PlaylistRepository, playlist_config::PlaylistConfigRepository,
        song::SongRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        playlist::{
            CreatePlaylistParams, InsertPlaylistParam, PlaylistConfig, PlaylistCreation,
            PlaylistWithConfig,
        },
        song::{SongDecision, SongDecisionOutcome, SongDecisionParams, SongStatus},
    },
    service::{
        playlist::{find_owned_playlist, generate_unique_playlist_code},
        token::TokenRefreshGuard,
    },
    spotify::{NewSpotifyPlaylist, SpotifyProvider},
    util::deadline::with_deadline,
};

pub struct PlaylistMutationCoordinator<'a> {
    db: &'a DatabaseConnection,
    provider: &'a dyn SpotifyProvider,
    token_skew: Duration,
}

impl<'a> PlaylistMutationCoordinator<'a> {
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

    /// Accepts or rejects a submitted song.
    ///
    /// Accepting adds the track to the Spotify playlist and marks the song
    /// accepted; the song is only marked accepted if Spotify accepted the track.
    /// Accepting an already accepted song succeeds without calling Spotify.
    /// Rejecting never calls Spotify and may be repeated.
    ///
    /// # Arguments
    /// - `params` - Playlist, song URI, decision and acting user
    /// - `deadline` - Time allowed for the whole operation
    ///
    /// # Returns
    /// - `Ok(SongDecisionOutcome)` - Updated song and the refreshed token, if any
    /// - `Err(AppError::NotFound)` - Playlist, song or stored credentials missing
    /// - `Err(AppError::Forbidden)` - Acting user does not own the playlist
    /// - `Err(AppError::Validation)` - Song is blacklisted and cannot be accepted
    /// - `Err(AppError::ProviderErr)` - Token refresh or add-track call failed
    /// - `Err(AppError::ServiceUnavailable)` - Deadline elapsed
    pub async fn decide_song(
        &self,
        params: SongDecisionParams,
        deadline: std::time::Duration,
    ) -> Result<SongDecisionOutcome, AppError> {
        with_deadline(deadline, self.run_decision(params)).await
    }

    /// Creates a playlist on the owner's Spotify account and records it locally.
    ///
    /// The local playlist row and its default configuration are written only
    /// after Spotify returned the new playlist's id.
    ///
    /// # Returns
    /// - `Ok(PlaylistCreation)` - Playlist with configuration and the refreshed token, if any
    /// - `Err(AppError::Validation)` - Empty name or owner without a Spotify account
    /// - `Err(AppError::NotFound)` - Owner or stored credentials missing
    /// - `Err(AppError::ProviderErr)` - Token refresh or playlist creation failed
    /// - `Err(AppError::ServiceUnavailable)` - Deadline elapsed
    pub async fn create_playlist(
        &self,
        params: CreatePlaylistParams,
        deadline: std::time::Duration,
    ) -> Result<PlaylistCreation, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Playlist name must not be empty".to_string(),
            ));
        }

        with_deadline(deadline, self.run_creation(params)).await
    }

    /// Runs a decision in its own transaction without a deadline of its own.
    pub(crate) async fn run_decision(
        &self,
        params: SongDecisionParams,
    ) -> Result<SongDecisionOutcome, AppError> {
        let txn = self.db.begin().await?;

        match self.apply_decision(&txn, &params).await {
            Ok(outcome) => {
                txn.commit().await?;
                Ok(outcome)
            }
            Err(err) => {
                rollback(txn).await;
                Err(err)
            }
        }
    }

    async fn run_creation(&self, params: CreatePlaylistParams) -> Result<PlaylistCreation, AppError> {
        let txn = self.db.begin().await?;

        match self.apply_creation(&txn, params).await {
            Ok(creation) => {
                txn.commit().await?;
                tracing::info!(
                    playlist_id = creation.playlist.playlist.id,
                    code = %creation.playlist.playlist.code,
                    "Created playlist"
                );
                Ok(creation)
            }
            Err(err) => {
                rollback(txn).await;
                Err(err)
            }
        }
    }

    async fn apply_decision(
        &self,
        txn: &DatabaseTransaction,
        params: &SongDecisionParams,
    ) -> Result<SongDecisionOutcome, AppError> {
        let playlist = find_owned_playlist(txn, params.user_id, params.playlist_id).await?;

        let song_repo = SongRepository::new(txn);
        let song = song_repo
            .find_by_playlist_and_uri(playlist.id, &params.song_uri)
            .await?
            .ok_or_else(|| AppError::NotFound("Song not found".to_string()))?;

        match params.decision {
            SongDecision::Reject => {
                let song = if song.status == SongStatus::Rejected {
                    song
                } else {
                    song_repo.set_status(song.id, SongStatus::Rejected).await?
                };

                Ok(SongDecisionOutcome {
                    song,
                    refreshed_token: None,
                })
            }
            SongDecision::Accept => {
                if song.blacklisted {
                    return Err(AppError::Validation(
                        "Blacklisted songs cannot be accepted".to_string(),
                    ));
                }
                if song.status == SongStatus::Accepted {
                    return Ok(SongDecisionOutcome {
                        song,
                        refreshed_token: None,
                    });
                }

                let guarded = TokenRefreshGuard::new(self.provider, self.token_skew)
                    .ensure_valid(txn, playlist.owner_id)
                    .await?;

                let snapshot_id = self
                    .provider
                    .add_tracks(
                        &guarded.token.access_token,
                        &playlist.spotify_playlist_id,
                        std::slice::from_ref(&song.uri),
                    )
                    .await?;
                tracing::debug!(playlist_id = playlist.id, %snapshot_id, "Added track to Spotify playlist");

                let song = song_repo.set_status(song.id, SongStatus::Accepted).await?;

                Ok(SongDecisionOutcome {
                    song,
                    refreshed_token: guarded.refreshed_token(),
                })
            }
        }
    }

    async fn apply_creation(
        &self,
        txn: &DatabaseTransaction,
        params: CreatePlaylistParams,
    ) -> Result<PlaylistCreation, AppError> {
        let owner = UserRepository::new(txn)
            .find_by_id(params.owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let spotify_user_id = owner.spotify_id.ok_or_else(|| {
            AppError::Validation("User has no linked Spotify account".to_string())
        })?;

        let guarded = TokenRefreshGuard::new(self.provider, self.token_skew)
            .ensure_valid(txn, owner.id)
            .await?;

        let spotify_playlist_id = self
            .provider
            .create_playlist(
                &guarded.token.access_token,
                &spotify_user_id,
                &NewSpotifyPlaylist {
                    name: params.name.clone(),
                    public: params.public,
                    collaborative: params.collaborative,
                    description: params.description,
                },
            )
            .await?;

        let code = generate_unique_playlist_code(txn).await?;
        let playlist = PlaylistRepository::new(txn)
            .insert(InsertPlaylistParam {
                owner_id: owner.id,
                spotify_playlist_id,
                name: params.name,
                code,
            })
            .await?;
        let config = PlaylistConfigRepository::new(txn)
            .insert(playlist.id, PlaylistConfig::default())
            .await?;

        Ok(PlaylistCreation {
            playlist: PlaylistWithConfig { playlist, config },
            refreshed_token: guarded.refreshed_token(),
        })
    }
}

/// Rolls back `txn`, logging a failure instead of masking the original error.
async fn rollback(txn: DatabaseTransaction) {
    if let Err(e) = txn.rollback().await {
        tracing::warn!("Failed to roll back transaction: {}", e);
    }
}
