use super::*;

/// Tests inserting a playlist record.
///
/// Expected: Ok with the stored values, findable by code
#[tokio::test]
async fn inserts_playlist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let repo = PlaylistRepository::new(db);

    let playlist = repo
        .insert(InsertPlaylistParam {
            owner_id: owner.id,
            spotify_playlist_id: "sp_1".to_string(),
            name: "Road Trip".to_string(),
            code: "ROAD01".to_string(),
        })
        .await?;

    assert_eq!(playlist.owner_id, owner.id);
    assert_eq!(playlist.name, "Road Trip");
    assert_eq!(
        repo.find_by_code("ROAD01").await?.map(|p| p.id),
        Some(playlist.id)
    );

    Ok(())
}

/// Tests that join codes are unique.
///
/// Expected: Err(DbErr) when reusing a code
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::playlist::PlaylistFactory::new(db, owner.id)
        .code("SAME00")
        .build()
        .await?;

    let result = PlaylistRepository::new(db)
        .insert(InsertPlaylistParam {
            owner_id: owner.id,
            spotify_playlist_id: "sp_2".to_string(),
            name: "Clash".to_string(),
            code: "SAME00".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
