use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF part of the `state` parameter does not match the value stored in
    /// the session, or the session holds no value at all. Results in a
    /// 422 Unprocessable Entity response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The `state` parameter is not of the form `<csrf>-<platform>`.
    #[error("Malformed OAuth state parameter: {0}")]
    MalformedState(String),

    /// The `platform` value is neither `web` nor `app`.
    #[error("Unknown login platform: {0}")]
    UnknownPlatform(String),

    /// Authorization header present but not of the form `Bearer <token>`.
    #[error("Authorization header must be of the form 'Bearer <token>'")]
    MalformedAuthorizationHeader,

    /// Bearer token was not issued to any user.
    #[error("Bearer token is not recognized")]
    UnknownToken,

    /// Request reached a protected endpoint without credentials.
    #[error("Authentication required")]
    AnonymousUser,
}

/// Converts authentication errors into HTTP responses.
///
/// - `CsrfValidationFailed` / `MalformedState` / `UnknownPlatform` → 422 with a
///   generic "issue logging you in" message
/// - Bearer failures → 401 with a `WWW-Authenticate: Bearer` challenge
///
/// The detailed reason is logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failed: {}", self);

        match self {
            Self::CsrfValidationFailed | Self::MalformedState(_) | Self::UnknownPlatform(_) => {
                error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "validation",
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::MalformedAuthorizationHeader | Self::UnknownToken | Self::AnonymousUser => {
                let mut response =
                    error_response(StatusCode::UNAUTHORIZED, "unauthorized", self.to_string());
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    header::HeaderValue::from_static("Bearer"),
                );
                response
            }
        }
    }
}
