//! Event data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{CreateEventParams, Event};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an event with an already generated join code.
    pub async fn insert(&self, params: CreateEventParams, code: String) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(code),
            playlist_id: ActiveValue::Set(params.playlist_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn find_by_id(&self, event_id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Finds an event by join code. Codes are case sensitive.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find()
            .filter(entity::event::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Event::from_entity))
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find()
            .filter(entity::event::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::event::Column::CreatedAt)
            .order_by_desc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    pub async fn rename(&self, event_id: i32, name: String) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            id: ActiveValue::Unchanged(event_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn delete(&self, event_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(event_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
