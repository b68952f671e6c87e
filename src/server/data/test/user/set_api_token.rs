use super::*;

/// Tests issuing an API token to a user that has none.
///
/// Expected: token readable back and resolving to the user
#[tokio::test]
async fn stores_token_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .without_api_token()
        .build()
        .await?;
    let repo = UserRepository::new(db);
    assert!(repo.find_api_token(user.id).await?.is_none());

    repo.set_api_token(user.id, "fresh-token").await?;

    assert_eq!(
        repo.find_api_token(user.id).await?,
        Some("fresh-token".to_string())
    );
    let found = repo.find_by_api_token("fresh-token").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests replacing a user's API token.
///
/// Expected: only the new token resolves, other users keep theirs
#[tokio::test]
async fn replaces_previous_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token("old-token")
        .build()
        .await?;
    let other = factory::user::UserFactory::new(db)
        .api_token("other-token")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    repo.set_api_token(user.id, "new-token").await?;

    assert!(repo.find_by_api_token("old-token").await?.is_none());
    assert_eq!(
        repo.find_by_api_token("new-token").await?.map(|u| u.id),
        Some(user.id)
    );
    assert_eq!(
        repo.find_by_api_token("other-token").await?.map(|u| u.id),
        Some(other.id)
    );

    Ok(())
}
