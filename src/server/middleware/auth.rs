//! Bearer token authentication.
//!
//! A request is authenticated by the API token issued at login, sent as
//! `Authorization: Bearer <token>`. The Spotify credentials are stored
//! separately, so refreshing them never changes how a user signs in.

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Who is making a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    /// No `Authorization` header was sent.
    Anonymous,
    User(User),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the caller from the request headers.
    ///
    /// A missing header is anonymous. A header that is present but malformed or
    /// carries an unknown token is an error rather than anonymous.
    ///
    /// # Returns
    /// - `Ok(Identity::Anonymous)` - No `Authorization` header
    /// - `Ok(Identity::User)` - Token belongs to a stored user
    /// - `Err(AuthError::MalformedAuthorizationHeader)` - Not `Bearer <token>`
    /// - `Err(AuthError::UnknownToken)` - No user holds that token
    pub async fn identify(&self, headers: &HeaderMap) -> Result<Identity, AppError> {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Ok(Identity::Anonymous);
        };
        let token = bearer_token(value)?;

        let Some(user) = UserRepository::new(self.db).find_by_api_token(token).await? else {
            return Err(AuthError::UnknownToken.into());
        };

        Ok(Identity::User(user))
    }

    /// Like `identify`, but anonymous callers are rejected.
    pub async fn require_user(&self, headers: &HeaderMap) -> Result<User, AppError> {
        match self.identify(headers).await? {
            Identity::User(user) => Ok(user),
            Identity::Anonymous => Err(AuthError::AnonymousUser.into()),
        }
    }
}

fn bearer_token(value: &HeaderValue) -> Result<&str, AuthError> {
    let value = value
        .to_str()
        .map_err(|_| AuthError::MalformedAuthorizationHeader)?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(AuthError::MalformedAuthorizationHeader),
    }
}
