//! Stored OAuth credential models.

use chrono::{DateTime, Duration, Utc};

use crate::model::api::TokenDto;

/// Spotify credentials persisted for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredToken {
    pub user_id: i32,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredToken {
    pub fn from_entity(entity: entity::oauth_token::Model) -> Self {
        Self {
            user_id: entity.user_id,
            access_token: entity.access_token,
            refresh_token: entity.refresh_token,
            expires_at: entity.expires_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether the access token can still be used at `now`.
    ///
    /// A token is valid only while `expires_at - skew` lies strictly after `now`,
    /// so tokens about to expire are treated as already expired.
    pub fn is_valid_at(&self, now: DateTime<Utc>, skew: Duration) -> bool {
        self.expires_at - skew > now
    }

    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.access_token,
            expires_at: self.expires_at,
        }
    }
}

/// Credentials to write for a user, replacing any existing row.
#[derive(Debug, Clone)]
pub struct UpsertTokenParam {
    pub user_id: i32,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}
