//! Event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::event::{CreateEventDto, EventDto, PublicEventDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    /// Six character join code, `[a-zA-Z0-9]`.
    pub code: String,
    pub playlist_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            code: entity.code,
            playlist_id: entity.playlist_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            code: self.code,
            playlist_id: self.playlist_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub owner_id: i32,
    pub name: String,
    pub playlist_id: Option<i32>,
}

impl CreateEventParams {
    pub fn from_dto(owner_id: i32, dto: CreateEventDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            playlist_id: dto.playlist_id,
        }
    }
}

/// Event resolved from its join code, with the linked playlist's code.
#[derive(Debug, Clone)]
pub struct EventLookup {
    pub event: Event,
    pub playlist_code: Option<String>,
}

impl EventLookup {
    pub fn into_dto(self) -> PublicEventDto {
        PublicEventDto {
            name: self.event.name,
            code: self.event.code,
            playlist_code: self.playlist_code,
        }
    }
}
