use super::*;

fn accept(playlist_id: i32, song_uri: &str, user_id: i32) -> SongDecisionParams {
    SongDecisionParams {
        playlist_id,
        song_uri: song_uri.to_string(),
        decision: SongDecision::Accept,
        user_id,
    }
}

fn reject(playlist_id: i32, song_uri: &str, user_id: i32) -> SongDecisionParams {
    SongDecisionParams {
        decision: SongDecision::Reject,
        ..accept(playlist_id, song_uri, user_id)
    }
}

/// Tests accepting a pending song with a valid token.
///
/// Expected: track added to the Spotify playlist once, song accepted, no refresh
#[tokio::test]
async fn accepts_pending_song() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let (owner, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let song = factory::song::create_song(db, playlist.id).await?;

    let outcome = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .decide_song(accept(playlist.id, &song.uri, owner.id), DEADLINE)
        .await?;

    assert_eq!(outcome.song.status, SongStatus::Accepted);
    assert!(outcome.refreshed_token.is_none());
    assert_eq!(spotify.refresh_count(), 0);
    assert_eq!(spotify.add_track_count(), 1);

    let added = spotify.added.lock().unwrap().clone();
    assert_eq!(added[0].1, playlist.spotify_playlist_id);
    assert_eq!(added[0].2, vec![song.uri.clone()]);

    assert_eq!(
        stored_song(db, playlist.id, &song.uri).await?.status,
        SongStatus::Accepted
    );

    Ok(())
}

/// Tests accepting with an expired owner token.
///
/// Expected: one refresh, add-track call uses the refreshed token, refreshed
/// token returned and persisted
#[tokio::test]
async fn refreshes_expired_token_before_adding() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let owner = factory::user::create_user(db).await?;
    let token = factory::oauth_token::OauthTokenFactory::new(db, owner.id)
        .expired()
        .build()
        .await?;
    let playlist = factory::playlist::create_playlist(db, owner.id).await?;
    let song = factory::song::create_song(db, playlist.id).await?;

    let outcome = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .decide_song(accept(playlist.id, &song.uri, owner.id), DEADLINE)
        .await?;

    assert_eq!(spotify.refresh_count(), 1);
    assert_eq!(spotify.added.lock().unwrap()[0].0, "refreshed_access_1");

    let refreshed = outcome.refreshed_token.expect("token should have been refreshed");
    assert_eq!(refreshed.access_token, "refreshed_access_1");
    assert!(refreshed.expires_at > token.expires_at);
    assert_eq!(
        stored_token(db, owner.id).await?.access_token,
        "refreshed_access_1"
    );

    Ok(())
}

/// Tests that a failed add-track call rolls everything back.
///
/// Expected: Err(ProviderErr), song still pending, token refresh discarded
#[tokio::test]
async fn add_track_failure_rolls_back() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new().failing_add_tracks();

    let owner = factory::user::create_user(db).await?;
    let token = factory::oauth_token::OauthTokenFactory::new(db, owner.id)
        .expired()
        .build()
        .await?;
    let playlist = factory::playlist::create_playlist(db, owner.id).await?;
    let song = factory::song::create_song(db, playlist.id).await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .decide_song(accept(playlist.id, &song.uri, owner.id), DEADLINE)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProviderErr(ProviderError::Status { .. }))
    ));
    assert_eq!(spotify.refresh_count(), 1);
    assert_eq!(
        stored_song(db, playlist.id, &song.uri).await?.status,
        SongStatus::Pending
    );
    assert_eq!(
        stored_token(db, owner.id).await?.access_token,
        token.access_token
    );

    Ok(())
}

/// Tests that a failed refresh stops before Spotify is called.
///
/// Expected: Err(ProviderError::TokenRefresh), no add-track call, song pending
#[tokio::test]
async fn refresh_failure_skips_add() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new().failing_refresh();

    let owner = factory::user::create_user(db).await?;
    factory::oauth_token::OauthTokenFactory::new(db, owner.id)
        .expired()
        .build()
        .await?;
    let playlist = factory::playlist::create_playlist(db, owner.id).await?;
    let song = factory::song::create_song(db, playlist.id).await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .decide_song(accept(playlist.id, &song.uri, owner.id), DEADLINE)
        .await;

    assert!(matches!(
        result,
        Err(AppError::ProviderErr(ProviderError::TokenRefresh(_)))
    ));
    assert_eq!(spotify.add_track_count(), 0);
    assert_eq!(
        stored_song(db, playlist.id, &song.uri).await?.status,
        SongStatus::Pending
    );

    Ok(())
}

/// Tests rejecting a song.
///
/// Expected: song rejected, Spotify never called, repeating the rejection succeeds
#[tokio::test]
async fn rejects_without_calling_spotify() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let (owner, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let song = factory::song::create_song(db, playlist.id).await?;
    let coordinator = PlaylistMutationCoordinator::new(db, &spotify, skew());

    let outcome = coordinator
        .decide_song(reject(playlist.id, &song.uri, owner.id), DEADLINE)
        .await?;
    assert_eq!(outcome.song.status, SongStatus::Rejected);

    let again = coordinator
        .decide_song(reject(playlist.id, &song.uri, owner.id), DEADLINE)
        .await?;
    assert_eq!(again.song.status, SongStatus::Rejected);

    assert_eq!(spotify.refresh_count(), 0);
    assert_eq!(spotify.add_track_count(), 0);

    Ok(())
}

/// Tests accepting a song that was already accepted.
///
/// Expected: Ok with the accepted song, no add-track call
#[tokio::test]
async fn accepting_twice_is_a_no_op() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let (owner, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let song = factory::song::SongFactory::new(db, playlist.id)
        .status("accepted")
        .build()
        .await?;

    let outcome = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .decide_song(accept(playlist.id, &song.uri, owner.id), DEADLINE)
        .await?;

    assert_eq!(outcome.song.status, SongStatus::Accepted);
    assert_eq!(spotify.add_track_count(), 0);

    Ok(())
}

/// Tests accepting a blacklisted song.
///
/// Expected: Err(AppError::Validation), no add-track call
#[tokio::test]
async fn blacklisted_song_cannot_be_accepted() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let (owner, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let song = factory::song::SongFactory::new(db, playlist.id)
        .blacklisted(true)
        .build()
        .await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .decide_song(accept(playlist.id, &song.uri, owner.id), DEADLINE)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(spotify.add_track_count(), 0);

    Ok(())
}

/// Tests deciding on another user's playlist.
///
/// Expected: Err(AppError::Forbidden), song untouched
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let (_, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let song = factory::song::create_song(db, playlist.id).await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .decide_song(reject(playlist.id, &song.uri, intruder.id), DEADLINE)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(
        stored_song(db, playlist.id, &song.uri).await?.status,
        SongStatus::Pending
    );

    Ok(())
}

/// Tests deciding on a song that was never submitted.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_song_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new();

    let (owner, playlist) = factory::helpers::create_playlist_with_owner(db).await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .decide_song(accept(playlist.id, "spotify:track:missing", owner.id), DEADLINE)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an elapsed deadline cancels the decision.
///
/// Expected: Err(AppError::ServiceUnavailable), song still pending
#[tokio::test]
async fn deadline_cancels_and_rolls_back() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let spotify = FakeSpotify::new().with_delay(Duration::from_millis(500));

    let (owner, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let song = factory::song::create_song(db, playlist.id).await?;

    let result = PlaylistMutationCoordinator::new(db, &spotify, skew())
        .decide_song(
            accept(playlist.id, &song.uri, owner.id),
            Duration::from_millis(50),
        )
        .await;

    assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    assert_eq!(
        stored_song(db, playlist.id, &song.uri).await?.status,
        SongStatus::Pending
    );

    Ok(())
}
