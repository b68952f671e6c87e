use super::*;

/// Tests that a request without an Authorization header is anonymous.
///
/// Expected: Ok(Identity::Anonymous)
#[tokio::test]
async fn anonymous_without_header() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let identity = AuthGuard::new(db).identify(&HeaderMap::new()).await?;

    assert_eq!(identity, Identity::Anonymous);

    Ok(())
}

/// Tests resolving an issued API token to its owner.
///
/// Expected: Ok(Identity::User) for the token's user
#[tokio::test]
async fn resolves_known_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .display_name("Host")
        .api_token("host-token")
        .build()
        .await?;
    factory::oauth_token::OauthTokenFactory::new(db, user.id)
        .build()
        .await?;

    let identity = AuthGuard::new(db).identify(&bearer("host-token")).await?;

    match identity {
        Identity::User(found) => {
            assert_eq!(found.id, user.id);
            assert_eq!(found.display_name, "Host");
        }
        Identity::Anonymous => panic!("Expected user identity"),
    }

    Ok(())
}

/// Tests that expired Spotify credentials do not affect the API token.
///
/// Expected: Ok(Identity::User)
#[tokio::test]
async fn expired_spotify_token_still_identifies_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token("host-token")
        .build()
        .await?;
    factory::oauth_token::OauthTokenFactory::new(db, user.id)
        .access_token("stale-token")
        .expired()
        .build()
        .await?;

    let identity = AuthGuard::new(db).identify(&bearer("host-token")).await?;

    assert!(matches!(identity, Identity::User(found) if found.id == user.id));

    Ok(())
}

/// Tests that a Spotify access token is not accepted as a bearer.
///
/// Expected: Err(AuthError::UnknownToken)
#[tokio::test]
async fn rejects_spotify_access_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token("host-token")
        .build()
        .await?;
    factory::oauth_token::OauthTokenFactory::new(db, user.id)
        .access_token("spotify-access")
        .build()
        .await?;

    let result = AuthGuard::new(db).identify(&bearer("spotify-access")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownToken))
    ));

    Ok(())
}

/// Tests that an unknown token is rejected instead of treated as anonymous.
///
/// Expected: Err(AuthError::UnknownToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let result = AuthGuard::new(db).identify(&bearer("nobody")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownToken))
    ));

    Ok(())
}

/// Tests header shapes other than `Bearer <token>`.
///
/// Expected: Err(AuthError::MalformedAuthorizationHeader) for each
#[tokio::test]
async fn rejects_malformed_header() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.database().await.unwrap();
    let guard = AuthGuard::new(db);

    for value in ["Basic abc", "Bearer", "Bearer   ", "token-only"] {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));

        let result = guard.identify(&headers).await;

        assert!(
            matches!(
                result,
                Err(AppError::AuthErr(AuthError::MalformedAuthorizationHeader))
            ),
            "header '{}' should be rejected",
            value
        );
    }

    Ok(())
}
