use super::*;

/// Tests overwriting a playlist's configuration.
///
/// Expected: Some with the new values, persisted
#[tokio::test]
async fn overwrites_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let repo = PlaylistConfigRepository::new(db);
    let config = PlaylistConfig {
        explicit: false,
        require_approval: false,
        max_songs: 5,
    };

    let updated = repo.update(playlist.id, config).await?;

    assert_eq!(updated, Some(config));
    assert_eq!(repo.find_by_playlist_id(playlist.id).await?, Some(config));

    Ok(())
}

/// Tests updating a playlist without a configuration row.
///
/// Expected: None
#[tokio::test]
async fn missing_config_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PlaylistConfigRepository::new(db)
        .update(999, PlaylistConfig::default())
        .await?;

    assert_eq!(updated, None);

    Ok(())
}
