use std::time::Duration;

use crate::server::{
    data::{oauth_token::OauthTokenRepository, song::SongRepository},
    error::AppError,
    model::{song::Song, token::StoredToken},
};
use sea_orm::DatabaseConnection;


/// Deadline generous enough that tests never hit it unless they mean to.
const DEADLINE: Duration = Duration::from_secs(10);

fn skew() -> chrono::Duration {
    chrono::Duration::seconds(10)
}

async fn stored_token(db: &DatabaseConnection, user_id: i32) -> Result<StoredToken, AppError> {
    OauthTokenRepository::new(db)
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("token".to_string()))
}

async fn stored_song(db: &DatabaseConnection, playlist_id: i32, uri: &str) -> Result<Song, AppError> {
    SongRepository::new(db)
        .find_by_playlist_and_uri(playlist_id, uri)
        .await?
        .ok_or_else(|| AppError::NotFound("song".to_string()))
}
