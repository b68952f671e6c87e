use super::*;

/// Tests reading the credentials stored for a user.
///
/// Expected: Some for a user with credentials, None for a user without
#[tokio::test]
async fn finds_token_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::oauth_token::OauthTokenFactory::new(db, user.id)
        .access_token("lookup-me")
        .build()
        .await?;

    let repo = OauthTokenRepository::new(db);

    let found = repo.find_by_user_id(user.id).await?;
    assert_eq!(found.map(|t| t.access_token), Some("lookup-me".to_string()));
    assert!(repo.find_by_user_id(other.id).await?.is_none());

    Ok(())
}
