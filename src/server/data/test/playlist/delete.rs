use sea_orm::EntityTrait;

use super::*;

/// Tests deleting a playlist.
///
/// Expected: true, configuration and songs removed with it
#[tokio::test]
async fn deletes_playlist_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, playlist) = factory::helpers::create_playlist_with_owner(db).await?;
    factory::song::create_song(db, playlist.id).await?;

    let deleted = PlaylistRepository::new(db).delete(playlist.id).await?;

    assert!(deleted);
    assert!(entity::prelude::PlaylistConfig::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::Song::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a playlist that does not exist.
///
/// Expected: false
#[tokio::test]
async fn reports_missing_playlist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PlaylistRepository::new(db).delete(4242).await?);

    Ok(())
}
