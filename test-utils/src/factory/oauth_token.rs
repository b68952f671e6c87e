//! OAuth token factory for seeding stored credentials.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for stored Spotify credentials.
///
/// Tokens are valid for one hour by default. Use `expired()` or `expires_at()`
/// to exercise the refresh path.
pub struct OauthTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    access_token: String,
    refresh_token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> OauthTokenFactory<'a> {
    /// Creates a new OauthTokenFactory for `user_id`.
    ///
    /// Defaults:
    /// - access_token: `"access_{id}"`
    /// - refresh_token: `"refresh_{id}"`
    /// - expires_at: one hour from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            access_token: format!("access_{}", id),
            refresh_token: format!("refresh_{}", id),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    pub fn refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = refresh_token.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Sets the expiry one minute in the past.
    pub fn expired(mut self) -> Self {
        self.expires_at = Utc::now() - Duration::minutes(1);
        self
    }

    /// Builds and inserts the token entity into the database.
    pub async fn build(self) -> Result<entity::oauth_token::Model, DbErr> {
        entity::oauth_token::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            access_token: ActiveValue::Set(self.access_token),
            refresh_token: ActiveValue::Set(self.refresh_token),
            expires_at: ActiveValue::Set(self.expires_at),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a token valid for one hour for `user_id`.
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::oauth_token::Model, DbErr> {
    OauthTokenFactory::new(db, user_id).build().await
}
