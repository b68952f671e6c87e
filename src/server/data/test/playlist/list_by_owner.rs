use super::*;

/// Tests listing playlists by owner.
///
/// Expected: only the owner's playlists
#[tokio::test]
async fn lists_only_owned_playlists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::playlist::create_playlist(db, owner.id).await?;
    factory::playlist::create_playlist(db, owner.id).await?;
    factory::playlist::create_playlist(db, other.id).await?;

    let playlists = PlaylistRepository::new(db).list_by_owner(owner.id).await?;

    assert_eq!(playlists.len(), 2);
    assert!(playlists.iter().all(|p| p.owner_id == owner.id));

    Ok(())
}
