use super::*;

/// Tests join code collision checks.
///
/// Expected: true for a used code, false otherwise
#[tokio::test]
async fn reports_used_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_playlist_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::playlist::PlaylistFactory::new(db, owner.id)
        .code("USED99")
        .build()
        .await?;

    let repo = PlaylistRepository::new(db);

    assert!(repo.code_exists("USED99").await?);
    assert!(!repo.code_exists("FREE99").await?);

    Ok(())
}
