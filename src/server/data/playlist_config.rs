//! Playlist configuration repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::playlist::PlaylistConfig;

pub struct PlaylistConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlaylistConfigRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores the configuration row for a newly created playlist.
    pub async fn insert(
        &self,
        playlist_id: i32,
        config: PlaylistConfig,
    ) -> Result<PlaylistConfig, DbErr> {
        let entity = entity::playlist_config::ActiveModel {
            playlist_id: ActiveValue::Set(playlist_id),
            explicit: ActiveValue::Set(config.explicit),
            require_approval: ActiveValue::Set(config.require_approval),
            max_songs: ActiveValue::Set(config.max_songs),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PlaylistConfig::from_entity(entity))
    }

    pub async fn find_by_playlist_id(
        &self,
        playlist_id: i32,
    ) -> Result<Option<PlaylistConfig>, DbErr> {
        let entity = entity::prelude::PlaylistConfig::find()
            .filter(entity::playlist_config::Column::PlaylistId.eq(playlist_id))
            .one(self.db)
            .await?;

        Ok(entity.map(PlaylistConfig::from_entity))
    }

    /// Overwrites the configuration of a playlist.
    ///
    /// # Returns
    /// - `Ok(Some(PlaylistConfig))` - Updated configuration
    /// - `Ok(None)` - Playlist has no configuration row
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        playlist_id: i32,
        config: PlaylistConfig,
    ) -> Result<Option<PlaylistConfig>, DbErr> {
        let Some(existing) = entity::prelude::PlaylistConfig::find()
            .filter(entity::playlist_config::Column::PlaylistId.eq(playlist_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.explicit = ActiveValue::Set(config.explicit);
        active.require_approval = ActiveValue::Set(config.require_approval);
        active.max_songs = ActiveValue::Set(config.max_songs);
        let entity = active.update(self.db).await?;

        Ok(Some(PlaylistConfig::from_entity(entity)))
    }
}
