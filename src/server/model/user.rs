//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Application user, created on first successful Spotify login.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Spotify account id; users created outside the login flow have none.
    pub spotify_id: Option<String>,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            spotify_id: entity.spotify_id,
            display_name: entity.display_name,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            display_name: self.display_name,
            spotify_id: self.spotify_id,
            created_at: self.created_at,
        }
    }
}

/// Profile data used to create a user on first login.
#[derive(Debug, Clone)]
pub struct CreateSpotifyUserParam {
    pub spotify_id: String,
    pub email: String,
    pub display_name: String,
}
