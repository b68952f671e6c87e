//! Type-safe session wrappers.
//!
//! The only session state this backend keeps is the CSRF secret that lives
//! across the redirect to Spotify and back. API requests authenticate with
//! bearer tokens instead.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// CSRF token management for the OAuth login flow.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF secret for the login that is about to start.
    ///
    /// # Returns
    /// - `Ok(())` - Secret stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF secret.
    ///
    /// Each secret can be used for exactly one callback.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Secret found and removed
    /// - `Ok(None)` - No login in progress for this session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
