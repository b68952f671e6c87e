//! Song factory for submitted songs.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for songs on a playlist. Songs start out pending and not blacklisted.
pub struct SongFactory<'a> {
    db: &'a DatabaseConnection,
    playlist_id: i32,
    uri: String,
    status: String,
    blacklisted: bool,
}

impl<'a> SongFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, playlist_id: i32) -> Self {
        Self {
            db,
            playlist_id,
            uri: format!("spotify:track:track{}", next_id()),
            status: "pending".to_string(),
            blacklisted: false,
        }
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Sets the stored status (`pending`, `accepted` or `rejected`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn blacklisted(mut self, blacklisted: bool) -> Self {
        self.blacklisted = blacklisted;
        self
    }

    pub async fn build(self) -> Result<entity::song::Model, DbErr> {
        let now = Utc::now();
        entity::song::ActiveModel {
            playlist_id: ActiveValue::Set(self.playlist_id),
            uri: ActiveValue::Set(self.uri),
            status: ActiveValue::Set(self.status),
            blacklisted: ActiveValue::Set(self.blacklisted),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending song with a unique URI on `playlist_id`.
pub async fn create_song(
    db: &DatabaseConnection,
    playlist_id: i32,
) -> Result<entity::song::Model, DbErr> {
    SongFactory::new(db, playlist_id).build().await
}
