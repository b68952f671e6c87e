//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a six character join code that is unique within the test process.
pub fn next_code() -> String {
    format!("T{:05}", next_id() % 100_000)
}

/// Creates a playlist together with its owner, a valid token and the default configuration.
///
/// # Returns
/// - `Ok((owner, playlist))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_playlist_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::playlist::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    crate::factory::oauth_token::create_token(db, owner.id).await?;
    let playlist = crate::factory::playlist::create_playlist(db, owner.id).await?;

    Ok((owner, playlist))
}
