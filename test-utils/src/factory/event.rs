//! Event factory.

use crate::factory::helpers::{next_code, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    code: String,
    playlist_id: Option<i32>,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            name: format!("Event {}", next_id()),
            code: next_code(),
            playlist_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn playlist_id(mut self, playlist_id: i32) -> Self {
        self.playlist_id = Some(playlist_id);
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            playlist_id: ActiveValue::Set(self.playlist_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event without a playlist owned by `owner_id`.
pub async fn create_event(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, owner_id).build().await
}
