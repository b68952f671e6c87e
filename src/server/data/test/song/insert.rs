use super::*;

/// Tests inserting and updating a song row.
///
/// Expected: status and blacklist flag persisted through each update
#[tokio::test]
async fn inserts_and_updates_song() -> Result<(), AppError> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let repo = SongRepository::new(db);

    let song = repo
        .insert(playlist.id, "spotify:track:first", SongStatus::Pending, false)
        .await?;
    assert_eq!(song.status, SongStatus::Pending);

    let accepted = repo.set_status(song.id, SongStatus::Accepted).await?;
    assert_eq!(accepted.status, SongStatus::Accepted);

    let blacklisted = repo.set_blacklisted(song.id, true).await?;
    assert!(blacklisted.blacklisted);
    assert_eq!(blacklisted.status, SongStatus::Accepted);

    Ok(())
}

/// Tests the per-playlist URI uniqueness.
///
/// Expected: Err(AppError::Conflict) for a second row with the same URI, with a
/// message that does not reveal the constraint
#[tokio::test]
async fn duplicate_uri_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let repo = SongRepository::new(db);

    repo.insert(playlist.id, "spotify:track:twice", SongStatus::Pending, false)
        .await?;
    let result = repo
        .insert(playlist.id, "spotify:track:twice", SongStatus::Pending, false)
        .await;

    match result {
        Err(AppError::Conflict(message)) => {
            assert_eq!(message, "Resource already exists");
            assert!(!message.contains("song"));
            assert!(!message.contains("uri"));
        }
        other => panic!("Expected conflict, got {:?}", other.map(|s| s.id)),
    }

    Ok(())
}

/// Tests reading a row with an unknown status.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn unknown_status_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let song = factory::song::SongFactory::new(db, playlist.id)
        .status("maybe")
        .build()
        .await?;

    let result = SongRepository::new(db)
        .find_by_playlist_and_uri(playlist.id, &song.uri)
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
