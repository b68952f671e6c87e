//! Playlist factory for creating test playlists and their configuration.

use crate::factory::helpers::{next_code, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for playlists.
///
/// `build()` also inserts the playlist's configuration row so the playlist is
/// in the same shape the application creates.
pub struct PlaylistFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    spotify_playlist_id: String,
    name: String,
    code: String,
    explicit: bool,
    require_approval: bool,
    max_songs: i32,
}

impl<'a> PlaylistFactory<'a> {
    /// Creates a new PlaylistFactory owned by `owner_id`.
    ///
    /// Defaults:
    /// - spotify_playlist_id: `"sp_playlist_{id}"`
    /// - name: `"Playlist {id}"`
    /// - code: unique six character code
    /// - configuration: explicit allowed, approval required, 50 songs
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            spotify_playlist_id: format!("sp_playlist_{}", id),
            name: format!("Playlist {}", id),
            code: next_code(),
            explicit: true,
            require_approval: true,
            max_songs: 50,
        }
    }

    pub fn spotify_playlist_id(mut self, spotify_playlist_id: impl Into<String>) -> Self {
        self.spotify_playlist_id = spotify_playlist_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn explicit(mut self, explicit: bool) -> Self {
        self.explicit = explicit;
        self
    }

    pub fn require_approval(mut self, require_approval: bool) -> Self {
        self.require_approval = require_approval;
        self
    }

    pub fn max_songs(mut self, max_songs: i32) -> Self {
        self.max_songs = max_songs;
        self
    }

    /// Builds and inserts the playlist and its configuration.
    ///
    /// # Returns
    /// - `Ok(entity::playlist::Model)` - Created playlist entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::playlist::Model, DbErr> {
        let playlist = entity::playlist::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            spotify_playlist_id: ActiveValue::Set(self.spotify_playlist_id),
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::playlist_config::ActiveModel {
            playlist_id: ActiveValue::Set(playlist.id),
            explicit: ActiveValue::Set(self.explicit),
            require_approval: ActiveValue::Set(self.require_approval),
            max_songs: ActiveValue::Set(self.max_songs),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(playlist)
    }
}

/// Creates a playlist with default values owned by `owner_id`.
pub async fn create_playlist(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::playlist::Model, DbErr> {
    PlaylistFactory::new(db, owner_id).build().await
}
