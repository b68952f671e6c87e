//! Song data repository.
//!
//! Songs are unique per `(playlist_id, uri)`. Blacklisting is a soft flag on the
//! same row so a song that was never submitted can still be blacklisted.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::song::{Song, SongStatus},
};

pub struct SongRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SongRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the song row for `uri` on a playlist.
    ///
    /// # Returns
    /// - `Ok(Some(Song))` - Song exists (submitted or blacklisted)
    /// - `Ok(None)` - No row for that URI
    /// - `Err(AppError)` - Database error or unknown stored status
    pub async fn find_by_playlist_and_uri(
        &self,
        playlist_id: i32,
        uri: &str,
    ) -> Result<Option<Song>, AppError> {
        let entity = entity::prelude::Song::find()
            .filter(entity::song::Column::PlaylistId.eq(playlist_id))
            .filter(entity::song::Column::Uri.eq(uri))
            .one(self.db)
            .await?;

        entity.map(Song::from_entity).transpose()
    }

    /// Inserts a song row.
    pub async fn insert(
        &self,
        playlist_id: i32,
        uri: &str,
        status: SongStatus,
        blacklisted: bool,
    ) -> Result<Song, AppError> {
        let now = Utc::now();
        let entity = entity::song::ActiveModel {
            playlist_id: ActiveValue::Set(playlist_id),
            uri: ActiveValue::Set(uri.to_string()),
            status: ActiveValue::Set(status.as_str().to_string()),
            blacklisted: ActiveValue::Set(blacklisted),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Song::from_entity(entity)
    }

    /// Records the disposition of a song.
    pub async fn set_status(&self, song_id: i32, status: SongStatus) -> Result<Song, AppError> {
        let entity = entity::song::ActiveModel {
            id: ActiveValue::Unchanged(song_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Song::from_entity(entity)
    }

    pub async fn set_blacklisted(&self, song_id: i32, blacklisted: bool) -> Result<Song, AppError> {
        let entity = entity::song::ActiveModel {
            id: ActiveValue::Unchanged(song_id),
            blacklisted: ActiveValue::Set(blacklisted),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Song::from_entity(entity)
    }

    /// Lists songs on a playlist in submission order.
    ///
    /// # Arguments
    /// - `playlist_id` - Playlist to list
    /// - `status` - Only songs with this status when `Some`
    /// - `blacklisted` - Only songs with this blacklist flag when `Some`
    pub async fn list_by_playlist(
        &self,
        playlist_id: i32,
        status: Option<SongStatus>,
        blacklisted: Option<bool>,
    ) -> Result<Vec<Song>, AppError> {
        let mut query =
            entity::prelude::Song::find().filter(entity::song::Column::PlaylistId.eq(playlist_id));

        if let Some(status) = status {
            query = query.filter(entity::song::Column::Status.eq(status.as_str()));
        }
        if let Some(blacklisted) = blacklisted {
            query = query.filter(entity::song::Column::Blacklisted.eq(blacklisted));
        }

        let entities = query
            .order_by_asc(entity::song::Column::CreatedAt)
            .order_by_asc(entity::song::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Song::from_entity).collect()
    }

    /// Counts songs on a playlist that are not blacklisted.
    pub async fn count_active(&self, playlist_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Song::find()
            .filter(entity::song::Column::PlaylistId.eq(playlist_id))
            .filter(entity::song::Column::Blacklisted.eq(false))
            .count(self.db)
            .await
    }
}
