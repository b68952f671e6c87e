//! Playlist data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::playlist::{InsertPlaylistParam, Playlist};

pub struct PlaylistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlaylistRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the local record of a playlist that already exists on Spotify.
    ///
    /// # Returns
    /// - `Ok(Playlist)` - The created playlist
    /// - `Err(DbErr)` - Database error, including a unique violation on `code`
    pub async fn insert(&self, param: InsertPlaylistParam) -> Result<Playlist, DbErr> {
        let entity = entity::playlist::ActiveModel {
            owner_id: ActiveValue::Set(param.owner_id),
            spotify_playlist_id: ActiveValue::Set(param.spotify_playlist_id),
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(param.code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Playlist::from_entity(entity))
    }

    pub async fn find_by_id(&self, playlist_id: i32) -> Result<Option<Playlist>, DbErr> {
        let entity = entity::prelude::Playlist::find_by_id(playlist_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Playlist::from_entity))
    }

    /// Finds a playlist by its join code.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Playlist>, DbErr> {
        let entity = entity::prelude::Playlist::find()
            .filter(entity::playlist::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Playlist::from_entity))
    }

    /// Checks whether a join code is already taken.
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Playlist::find()
            .filter(entity::playlist::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists a user's playlists, newest first.
    pub async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<Playlist>, DbErr> {
        let entities = entity::prelude::Playlist::find()
            .filter(entity::playlist::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::playlist::Column::CreatedAt)
            .order_by_desc(entity::playlist::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Playlist::from_entity).collect())
    }

    /// Renames the local record. The Spotify playlist keeps its name.
    pub async fn rename(&self, playlist_id: i32, name: String) -> Result<Playlist, DbErr> {
        let entity = entity::playlist::ActiveModel {
            id: ActiveValue::Unchanged(playlist_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Playlist::from_entity(entity))
    }

    /// Deletes the local record; configuration and songs cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No row with that id
    pub async fn delete(&self, playlist_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Playlist::delete_by_id(playlist_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
