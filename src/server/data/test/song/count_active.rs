use super::*;

/// Tests counting songs toward the playlist limit.
///
/// Expected: blacklisted rows are not counted
#[tokio::test]
async fn ignores_blacklisted_songs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    factory::song::create_song(db, playlist.id).await?;
    factory::song::SongFactory::new(db, playlist.id)
        .status("accepted")
        .build()
        .await?;
    factory::song::SongFactory::new(db, playlist.id)
        .blacklisted(true)
        .build()
        .await?;

    assert_eq!(SongRepository::new(db).count_active(playlist.id).await?, 2);

    Ok(())
}
