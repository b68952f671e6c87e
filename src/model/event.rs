use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateEventDto {
    pub name: String,
    #[serde(default)]
    pub playlist_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateEventDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub code: String,
    pub playlist_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Event as shown to participants who joined with the event code.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PublicEventDto {
    pub name: String,
    pub code: String,
    pub playlist_code: Option<String>,
}
