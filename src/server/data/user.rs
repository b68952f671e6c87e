//! User data repository for database operations.
//!
//! Provides `UserRepository` for looking up users, creating them from a
//! Spotify profile on first login and managing the API token they
//! authenticate with.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::user::{CreateSpotifyUserParam, User};

/// Repository providing database operations for users.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their Spotify account id.
    pub async fn find_by_spotify_id(&self, spotify_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::SpotifyId.eq(spotify_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user an API token was issued to.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token belongs to this user
    /// - `Ok(None)` - No user holds that token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_api_token(&self, api_token: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ApiToken.eq(api_token))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Reads the API token issued to a user, if one was issued.
    pub async fn find_api_token(&self, user_id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.and_then(|user| user.api_token))
    }

    /// Stores `api_token` as the bearer credential of a user, replacing any previous one.
    pub async fn set_api_token(&self, user_id: i32, api_token: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::ApiToken, Expr::value(api_token))
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Inserts a user linked to a Spotify account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   Spotify id is already linked
    pub async fn create(&self, param: CreateSpotifyUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(None),
            spotify_id: ActiveValue::Set(Some(param.spotify_id)),
            display_name: ActiveValue::Set(param.display_name),
            api_token: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Returns the user linked to `param.spotify_id`, creating it if none exists.
    ///
    /// Existing users are returned unchanged; profile changes on Spotify are not
    /// copied over.
    pub async fn get_or_create(&self, param: CreateSpotifyUserParam) -> Result<User, DbErr> {
        if let Some(user) = self.find_by_spotify_id(&param.spotify_id).await? {
            return Ok(user);
        }

        self.create(param).await
    }
}
