use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::TokenDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreatePlaylistDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_collaborative: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdatePlaylistDto {
    pub name: String,
}

/// Partial configuration update. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdatePlaylistConfigDto {
    pub playlist_id: i32,
    #[serde(default)]
    pub explicit: Option<bool>,
    #[serde(default)]
    pub require_approval: Option<bool>,
    #[serde(default)]
    pub max_songs: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PlaylistConfigDto {
    pub explicit: bool,
    pub require_approval: bool,
    pub max_songs: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PlaylistDto {
    pub id: i32,
    pub owner_id: i32,
    pub spotify_playlist_id: String,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub config: PlaylistConfigDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreatedPlaylistDto {
    pub playlist: PlaylistDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshed_token: Option<TokenDto>,
}

/// What a participant sees after entering a join code.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PublicPlaylistDto {
    pub name: String,
    pub code: String,
    pub config: PlaylistConfigDto,
}
