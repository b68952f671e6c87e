//! Event management.
//!
//! An event is a named gathering with its own join code, optionally linked to
//! one of the host's playlists.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{event::EventRepository, playlist::PlaylistRepository},
    error::{internal::InternalError, AppError},
    model::event::{CreateEventParams, Event, EventLookup},
    service::playlist::find_owned_playlist,
    util::code::{generate_code, EVENT_CODE_ALPHABET, MAX_CODE_ATTEMPTS},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event with a fresh join code.
    ///
    /// # Returns
    /// - `Ok(Event)` - Created event
    /// - `Err(AppError::Validation)` - Empty name
    /// - `Err(AppError::NotFound)` / `Err(AppError::Forbidden)` - Linked playlist
    ///   missing or owned by someone else
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::Validation(
                "Event name must not be empty".to_string(),
            ));
        }
        if let Some(playlist_id) = params.playlist_id {
            find_owned_playlist(self.db, params.owner_id, playlist_id).await?;
        }

        let code = generate_unique_event_code(self.db).await?;
        let event = EventRepository::new(self.db).insert(params, code).await?;

        tracing::info!(event_id = event.id, code = %event.code, "Created event");

        Ok(event)
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).list_by_owner(user_id).await?)
    }

    pub async fn get(&self, user_id: i32, event_id: i32) -> Result<Event, AppError> {
        find_owned_event(self.db, user_id, event_id).await
    }

    pub async fn rename(&self, user_id: i32, event_id: i32, name: String) -> Result<Event, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "Event name must not be empty".to_string(),
            ));
        }

        find_owned_event(self.db, user_id, event_id).await?;

        Ok(EventRepository::new(self.db).rename(event_id, name).await?)
    }

    pub async fn delete(&self, user_id: i32, event_id: i32) -> Result<(), AppError> {
        find_owned_event(self.db, user_id, event_id).await?;

        if !EventRepository::new(self.db).delete(event_id).await? {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        Ok(())
    }

    /// Resolves an event code for participants, including the linked playlist's code.
    pub async fn get_by_code(&self, code: &str) -> Result<EventLookup, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No event with code {}", code)))?;

        let playlist_code = match event.playlist_id {
            Some(playlist_id) => PlaylistRepository::new(self.db)
                .find_by_id(playlist_id)
                .await?
                .map(|playlist| playlist.code),
            None => None,
        };

        Ok(EventLookup {
            event,
            playlist_code,
        })
    }
}

async fn find_owned_event<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    event_id: i32,
) -> Result<Event, AppError> {
    let event = EventRepository::new(db)
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    if event.owner_id != user_id {
        return Err(AppError::Forbidden(
            "Event belongs to another user".to_string(),
        ));
    }

    Ok(event)
}

async fn generate_unique_event_code<C: ConnectionTrait>(db: &C) -> Result<String, AppError> {
    let repo = EventRepository::new(db);

    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = generate_code(EVENT_CODE_ALPHABET);
        if !repo.code_exists(&code).await? {
            return Ok(code);
        }
    }

    Err(InternalError::CodeSpaceExhausted {
        resource: "event",
        attempts: MAX_CODE_ATTEMPTS,
    }
    .into())
}
