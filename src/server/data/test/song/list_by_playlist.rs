use super::*;

/// Tests status and blacklist filters.
///
/// Expected: each filter narrows the listing; results in submission order
#[tokio::test]
async fn filters_by_status_and_blacklist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let first = factory::song::create_song(db, playlist.id).await?;
    factory::song::SongFactory::new(db, playlist.id)
        .status("rejected")
        .build()
        .await?;
    factory::song::SongFactory::new(db, playlist.id)
        .blacklisted(true)
        .build()
        .await?;

    let repo = SongRepository::new(db);

    let all = repo.list_by_playlist(playlist.id, None, None).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, first.id);

    let rejected = repo
        .list_by_playlist(playlist.id, Some(SongStatus::Rejected), None)
        .await?;
    assert_eq!(rejected.len(), 1);

    let blacklisted = repo.list_by_playlist(playlist.id, None, Some(true)).await?;
    assert_eq!(blacklisted.len(), 1);
    assert!(blacklisted[0].blacklisted);

    Ok(())
}
