//! Playlist management for hosts.
//!
//! Creation involves Spotify and lives in the coordinator; everything here only
//! touches the local store.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{playlist::PlaylistRepository, playlist_config::PlaylistConfigRepository},
    error::{internal::InternalError, AppError},
    model::playlist::{Playlist, PlaylistConfig, PlaylistWithConfig, UpdatePlaylistConfigParams},
    util::code::{generate_code, MAX_CODE_ATTEMPTS, PLAYLIST_CODE_ALPHABET},
};

pub struct PlaylistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlaylistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the playlists owned by `user_id` with their configuration.
    pub async fn list(&self, user_id: i32) -> Result<Vec<PlaylistWithConfig>, AppError> {
        let playlists = PlaylistRepository::new(self.db).list_by_owner(user_id).await?;

        let mut result = Vec::with_capacity(playlists.len());
        for playlist in playlists {
            result.push(with_config(self.db, playlist).await?);
        }

        Ok(result)
    }

    /// Gets one of the user's playlists.
    ///
    /// # Returns
    /// - `Ok(PlaylistWithConfig)` - Playlist and configuration
    /// - `Err(AppError::NotFound)` - No playlist with that id
    /// - `Err(AppError::Forbidden)` - Playlist belongs to another user
    pub async fn get(&self, user_id: i32, playlist_id: i32) -> Result<PlaylistWithConfig, AppError> {
        let playlist = find_owned_playlist(self.db, user_id, playlist_id).await?;

        with_config(self.db, playlist).await
    }

    /// Resolves a join code for participants.
    ///
    /// Codes are matched case-insensitively since generated codes are uppercase.
    pub async fn get_by_code(&self, code: &str) -> Result<PlaylistWithConfig, AppError> {
        let playlist = PlaylistRepository::new(self.db)
            .find_by_code(&code.to_ascii_uppercase())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No playlist with code {}", code)))?;

        with_config(self.db, playlist).await
    }

    /// Renames the local record. The Spotify playlist keeps its name.
    pub async fn rename(
        &self,
        user_id: i32,
        playlist_id: i32,
        name: String,
    ) -> Result<PlaylistWithConfig, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "Playlist name must not be empty".to_string(),
            ));
        }

        find_owned_playlist(self.db, user_id, playlist_id).await?;
        let playlist = PlaylistRepository::new(self.db).rename(playlist_id, name).await?;

        with_config(self.db, playlist).await
    }

    /// Deletes the local record together with its configuration and songs.
    ///
    /// The playlist is left untouched on Spotify.
    pub async fn delete(&self, user_id: i32, playlist_id: i32) -> Result<(), AppError> {
        find_owned_playlist(self.db, user_id, playlist_id).await?;

        if !PlaylistRepository::new(self.db).delete(playlist_id).await? {
            return Err(AppError::NotFound("Playlist not found".to_string()));
        }

        tracing::info!(playlist_id, "Deleted playlist");

        Ok(())
    }

    /// Applies a partial configuration update.
    ///
    /// # Returns
    /// - `Ok(PlaylistWithConfig)` - Playlist with the updated configuration
    /// - `Err(AppError::Validation)` - `max_songs` is not positive
    /// - `Err(AppError::NotFound)` / `Err(AppError::Forbidden)` - Ownership check failed
    pub async fn update_config(
        &self,
        user_id: i32,
        params: UpdatePlaylistConfigParams,
    ) -> Result<PlaylistWithConfig, AppError> {
        if matches!(params.max_songs, Some(max) if max <= 0) {
            return Err(AppError::Validation(
                "max_songs must be greater than zero".to_string(),
            ));
        }

        let playlist = find_owned_playlist(self.db, user_id, params.playlist_id).await?;
        let current = with_config(self.db, playlist).await?;

        let config = params.apply_to(current.config);
        PlaylistConfigRepository::new(self.db)
            .update(current.playlist.id, config)
            .await?
            .ok_or(InternalError::MissingPlaylistConfig(current.playlist.id))?;

        Ok(PlaylistWithConfig {
            playlist: current.playlist,
            config,
        })
    }
}

/// Loads a playlist and checks that `user_id` owns it.
///
/// # Returns
/// - `Ok(Playlist)` - Playlist owned by the user
/// - `Err(AppError::NotFound)` - No playlist with that id
/// - `Err(AppError::Forbidden)` - Playlist belongs to another user
pub(crate) async fn find_owned_playlist<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    playlist_id: i32,
) -> Result<Playlist, AppError> {
    let playlist = PlaylistRepository::new(db)
        .find_by_id(playlist_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))?;

    if playlist.owner_id != user_id {
        return Err(AppError::Forbidden(
            "Playlist belongs to another user".to_string(),
        ));
    }

    Ok(playlist)
}

/// Loads the configuration of `playlist`.
pub(crate) async fn find_config<C: ConnectionTrait>(
    db: &C,
    playlist_id: i32,
) -> Result<PlaylistConfig, AppError> {
    PlaylistConfigRepository::new(db)
        .find_by_playlist_id(playlist_id)
        .await?
        .ok_or_else(|| InternalError::MissingPlaylistConfig(playlist_id).into())
}

async fn with_config<C: ConnectionTrait>(
    db: &C,
    playlist: Playlist,
) -> Result<PlaylistWithConfig, AppError> {
    let config = find_config(db, playlist.id).await?;

    Ok(PlaylistWithConfig { playlist, config })
}

/// Generates a playlist join code not used by any stored playlist.
///
/// # Returns
/// - `Ok(String)` - Unused code
/// - `Err(AppError::InternalErr(CodeSpaceExhausted))` - Every attempt collided
pub(crate) async fn generate_unique_playlist_code<C: ConnectionTrait>(
    db: &C,
) -> Result<String, AppError> {
    let repo = PlaylistRepository::new(db);

    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = generate_code(PLAYLIST_CODE_ALPHABET);
        if !repo.code_exists(&code).await? {
            return Ok(code);
        }
    }

    Err(InternalError::CodeSpaceExhausted {
        resource: "playlist",
        attempts: MAX_CODE_ATTEMPTS,
    }
    .into())
}
