//! Credential store for Spotify OAuth tokens.
//!
//! One row per user. Every write replaces the row for that user so the latest
//! credentials always win.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::token::{StoredToken, UpsertTokenParam};

pub struct OauthTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OauthTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the stored credentials for a user.
    ///
    /// # Returns
    /// - `Ok(Some(StoredToken))` - Credentials exist
    /// - `Ok(None)` - User never authorized the application
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<StoredToken>, DbErr> {
        let entity = entity::prelude::OauthToken::find()
            .filter(entity::oauth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(StoredToken::from_entity))
    }

    /// Writes credentials for a user, overwriting any existing row.
    ///
    /// # Returns
    /// - `Ok(StoredToken)` - The credentials as stored
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertTokenParam) -> Result<StoredToken, DbErr> {
        let entity = entity::prelude::OauthToken::insert(entity::oauth_token::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            access_token: ActiveValue::Set(param.access_token),
            refresh_token: ActiveValue::Set(param.refresh_token),
            expires_at: ActiveValue::Set(param.expires_at),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::oauth_token::Column::UserId)
                .update_columns([
                    entity::oauth_token::Column::AccessToken,
                    entity::oauth_token::Column::RefreshToken,
                    entity::oauth_token::Column::ExpiresAt,
                    entity::oauth_token::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(StoredToken::from_entity(entity))
    }
}
