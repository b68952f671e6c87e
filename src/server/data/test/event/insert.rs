use super::*;

/// Tests inserting an event and finding it by code.
///
/// Expected: Ok with the stored event, code lookup and existence check agree
#[tokio::test]
async fn inserts_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let repo = EventRepository::new(db);

    let event = repo
        .insert(
            CreateEventParams {
                owner_id: owner.id,
                name: "Block Party".to_string(),
                playlist_id: None,
            },
            "aB3dE9".to_string(),
        )
        .await?;

    assert_eq!(event.name, "Block Party");
    assert_eq!(event.playlist_id, None);
    assert_eq!(repo.find_by_code("aB3dE9").await?.map(|e| e.id), Some(event.id));
    assert!(repo.code_exists("aB3dE9").await?);
    assert!(!repo.code_exists("zzzzzz").await?);

    Ok(())
}

/// Tests that deleting the linked playlist unlinks the event.
///
/// Expected: event kept with `playlist_id` cleared
#[tokio::test]
async fn unlinks_deleted_playlist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    let event = factory::event::EventFactory::new(db, owner.id)
        .playlist_id(playlist.id)
        .build()
        .await?;

    crate::server::data::playlist::PlaylistRepository::new(db)
        .delete(playlist.id)
        .await?;

    let stored = EventRepository::new(db).find_by_id(event.id).await?.unwrap();
    assert_eq!(stored.playlist_id, None);

    Ok(())
}
