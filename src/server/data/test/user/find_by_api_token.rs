use super::*;

/// Tests resolving a bearer credential to its user.
///
/// Expected: Some for an issued token, None for an unknown one or a user without a token
#[tokio::test]
async fn finds_user_by_api_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token("issued-token")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .without_api_token()
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_api_token("issued-token").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_api_token("unknown").await?.is_none());
    assert!(repo.find_by_api_token("").await?.is_none());

    Ok(())
}
