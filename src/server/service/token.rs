//! Token refresh guard.
//!
//! Guarantees that any Spotify call is made with a currently valid access token,
//! refreshing and persisting it transparently when it has expired.

use chrono::{Duration, Utc};
use sea_orm::ConnectionTrait;

use crate::server::{
    data::oauth_token::OauthTokenRepository,
    error::AppError,
    model::token::{StoredToken, UpsertTokenParam},
    spotify::SpotifyProvider,
};

/// Token returned by the guard.
#[derive(Debug, Clone)]
pub struct GuardedToken {
    pub token: StoredToken,
    /// Whether the guard refreshed and persisted the token during this call.
    pub refreshed: bool,
}

impl GuardedToken {
    /// The token if it changed during this call, for echoing back to the client.
    pub fn refreshed_token(&self) -> Option<StoredToken> {
        self.refreshed.then(|| self.token.clone())
    }
}

pub struct TokenRefreshGuard<'a> {
    provider: &'a dyn SpotifyProvider,
    /// Tokens expiring within this window count as expired.
    skew: Duration,
}

impl<'a> TokenRefreshGuard<'a> {
    pub fn new(provider: &'a dyn SpotifyProvider, skew: Duration) -> Self {
        Self { provider, skew }
    }

    /// Returns a valid token for `user_id`, refreshing it first if needed.
    ///
    /// Reads and writes go through `db`, so when `db` is a transaction a refresh
    /// is discarded if that transaction rolls back. A valid token is returned
    /// untouched with no write. An expired one costs exactly one refresh call and
    /// one write. If Spotify omits a new refresh token the stored one is kept.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction the credential store is accessed through
    /// - `user_id` - Owner of the credentials
    ///
    /// # Returns
    /// - `Ok(GuardedToken)` - Token valid beyond the skew window
    /// - `Err(AppError::NotFound)` - User has no stored credentials
    /// - `Err(AppError::ProviderErr(TokenRefresh))` - Refresh failed; nothing was written
    /// - `Err(AppError::DbErr)` - Credential store failure
    pub async fn ensure_valid<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: i32,
    ) -> Result<GuardedToken, AppError> {
        let token_repo = OauthTokenRepository::new(db);

        let Some(token) = token_repo.find_by_user_id(user_id).await? else {
            return Err(AppError::NotFound(format!(
                "No Spotify credentials stored for user {}",
                user_id
            )));
        };

        if token.is_valid_at(Utc::now(), self.skew) {
            return Ok(GuardedToken {
                token,
                refreshed: false,
            });
        }

        tracing::info!(user_id, "Refreshing expired Spotify access token");

        let refreshed = self.provider.refresh_token(&token.refresh_token).await?;
        let expires_at = refreshed.expires_at(Utc::now())?;

        let stored = token_repo
            .upsert(UpsertTokenParam {
                user_id,
                access_token: refreshed.access_token,
                refresh_token: refreshed.refresh_token.unwrap_or(token.refresh_token),
                expires_at,
            })
            .await?;

        Ok(GuardedToken {
            token: stored,
            refreshed: true,
        })
    }
}
