use super::*;

fn params(owner_id: i32, name: &str) -> CreatePlaylistParams {
    CreatePlaylistParams {
        owner_id,
        name: name.to_string(),
        description: None,
        public: true,
        collaborative: false,
    }
}

/// Tests creating a playlist.
///
/// Expected: Spotify called once, local playlist with a six character code and
/// default configuration
#[tokio::test]
async fn creates_playlist_with_defaults() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let owner = factory::user::create_user(db).await?;
    factory::oauth_token::create_token(db, owner.id).await?;

    let creation = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .create_playlist(params(owner.id, "Friday Night"), DEADLINE)
        .await?;

    let playlist = &creation.playlist.playlist;
    assert_eq!(playlist.name, "Friday Night");
    assert_eq!(playlist.owner_id, owner.id);
    assert_eq!(playlist.spotify_playlist_id, "sp_created_1");
    assert_eq!(playlist.code.len(), 6);
    assert!(playlist
        .code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert_eq!(creation.playlist.config, PlaylistConfig::default());
    assert!(creation.refreshed_token.is_none());
    assert_eq!(spotify.create_playlist_count(), 1);

    let stored = PlaylistRepository::new(db).find_by_code(&playlist.code).await?;
    assert_eq!(stored.map(|p| p.id), Some(playlist.id));

    Ok(())
}

/// Tests that a Spotify failure leaves no local playlist behind.
///
/// Expected: Err(ProviderErr), owner has no playlists
#[tokio::test]
async fn provider_failure_leaves_no_row() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new().failing_create_playlist();

    let owner = factory::user::create_user(db).await?;
    factory::oauth_token::create_token(db, owner.id).await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .create_playlist(params(owner.id, "Doomed"), DEADLINE)
        .await;

    assert!(matches!(result, Err(AppError::ProviderErr(_))));
    assert!(PlaylistRepository::new(db)
        .list_by_owner(owner.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests creation with an expired token.
///
/// Expected: playlist created with the refreshed token, which is returned
#[tokio::test]
async fn refreshes_token_before_creating() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let owner = factory::user::create_user(db).await?;
    factory::oauth_token::OauthTokenFactory::new(db, owner.id)
        .expired()
        .build()
        .await?;

    let creation = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .create_playlist(params(owner.id, "Refreshed"), DEADLINE)
        .await?;

    assert_eq!(spotify.refresh_count(), 1);
    assert_eq!(
        spotify.create_playlist_tokens.lock().unwrap().clone(),
        vec!["refreshed_access_1".to_string()]
    );
    assert_eq!(
        creation.refreshed_token.map(|t| t.access_token),
        Some("refreshed_access_1".to_string())
    );

    Ok(())
}

/// Tests that a failed creation also discards the token refresh.
///
/// Expected: Err(ProviderErr), stored token is the original expired one
#[tokio::test]
async fn failed_creation_discards_refresh() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new().failing_create_playlist();

    let owner = factory::user::create_user(db).await?;
    let token = factory::oauth_token::OauthTokenFactory::new(db, owner.id)
        .expired()
        .build()
        .await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .create_playlist(params(owner.id, "Doomed"), DEADLINE)
        .await;

    assert!(result.is_err());
    assert_eq!(spotify.refresh_count(), 1);
    assert_eq!(
        stored_token(db, owner.id).await?.access_token,
        token.access_token
    );

    Ok(())
}

/// Tests an owner without a linked Spotify account.
///
/// Expected: Err(AppError::Validation), Spotify never called
#[tokio::test]
async fn requires_spotify_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let owner = factory::user::UserFactory::new(db)
        .without_spotify()
        .build()
        .await?;
    factory::oauth_token::create_token(db, owner.id).await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .create_playlist(params(owner.id, "No Account"), DEADLINE)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(spotify.create_playlist_count(), 0);

    Ok(())
}

/// Tests an empty playlist name.
///
/// Expected: Err(AppError::Validation), Spotify never called
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let owner = factory::user::create_user(db).await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .create_playlist(params(owner.id, "   "), DEADLINE)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(spotify.create_playlist_count(), 0);

    Ok(())
}

/// Tests that an elapsed deadline leaves no local playlist.
///
/// Expected: Err(AppError::ServiceUnavailable), owner has no playlists
#[tokio::test]
async fn deadline_leaves_no_row() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new().with_delay(Duration::from_millis(500));

    let owner = factory::user::create_user(db).await?;
    factory::oauth_token::create_token(db, owner.id).await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .create_playlist(params(owner.id, "Slow"), Duration::from_millis(50))
        .await;

    assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    assert!(PlaylistRepository::new(db)
        .list_by_owner(owner.id)
        .await?
        .is_empty());

    Ok(())
}
