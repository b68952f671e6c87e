use super::*;

fn param(spotify_id: &str) -> CreateSpotifyUserParam {
    CreateSpotifyUserParam {
        spotify_id: spotify_id.to_string(),
        email: format!("{}@example.com", spotify_id),
        display_name: format!("Listener {}", spotify_id),
    }
}

/// Tests creating a user on first login.
///
/// Expected: Ok with a new user linked to the Spotify id
#[tokio::test]
async fn creates_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).get_or_create(param("newbie")).await?;

    assert_eq!(user.spotify_id.as_deref(), Some("newbie"));
    assert_eq!(user.email, "newbie@example.com");
    assert_eq!(user.display_name, "Listener newbie");

    Ok(())
}

/// Tests returning the existing user on later logins.
///
/// Expected: Ok with the same id, stored profile left unchanged
#[tokio::test]
async fn returns_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .spotify_id("regular")
        .display_name("Original Name")
        .build()
        .await?;

    let user = UserRepository::new(db).get_or_create(param("regular")).await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.display_name, "Original Name");

    Ok(())
}

/// Tests that linking a Spotify id twice violates the unique index.
///
/// Expected: Err(DbErr) from `create`
#[tokio::test]
async fn create_rejects_duplicate_spotify_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .spotify_id("taken")
        .build()
        .await?;

    let result = UserRepository::new(db).create(param("taken")).await;

    assert!(result.is_err());

    Ok(())
}
