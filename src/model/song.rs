use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::TokenDto;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SongStatusDto {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SubmitSongDto {
    pub playlist_code: String,
    pub song_uri: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SongDecisionRequestDto {
    pub playlist_id: i32,
    pub song_uri: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BlacklistSongDto {
    pub playlist_id: i32,
    pub song_uri: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SongListQuery {
    pub playlist_id: i32,
    #[serde(default)]
    pub status: Option<SongStatusDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlacklistQuery {
    pub playlist_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SongDto {
    pub id: i32,
    pub playlist_id: i32,
    pub uri: String,
    pub status: SongStatusDto,
    pub blacklisted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SongDecisionDto {
    pub song: SongDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshed_token: Option<TokenDto>,
}
