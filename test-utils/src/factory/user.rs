//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .spotify_id("spotify-user")
///     .display_name("Host")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    spotify_id: Option<String>,
    display_name: String,
    api_token: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - spotify_id: `Some("spotify_{id}")`
    /// - display_name: `"User {id}"`
    /// - api_token: `Some("api_{id}")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            spotify_id: Some(format!("spotify_{}", id)),
            display_name: format!("User {}", id),
            api_token: Some(format!("api_{}", id)),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn spotify_id(mut self, spotify_id: impl Into<String>) -> Self {
        self.spotify_id = Some(spotify_id.into());
        self
    }

    /// Creates the user without a linked Spotify account.
    pub fn without_spotify(mut self) -> Self {
        self.spotify_id = None;
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the bearer token the user authenticates with.
    pub fn api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Creates the user without an issued API token.
    pub fn without_api_token(mut self) -> Self {
        self.api_token = None;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(None),
            spotify_id: ActiveValue::Set(self.spotify_id),
            display_name: ActiveValue::Set(self.display_name),
            api_token: ActiveValue::Set(self.api_token),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
