use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::respond,
        error::AppError,
        middleware::{auth::AuthGuard, session::CsrfSession},
        service::auth::{LoginPlatform, SpotifyAuthService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginParams {
    /// `web` or `app`; decides where the callback redirects to.
    #[serde(default = "default_platform")]
    pub platform: String,
}

fn default_platform() -> String {
    LoginPlatform::Web.as_str().to_string()
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: String,
    /// Set by Spotify when the user declined the login.
    pub error: Option<String>,
}

/// Start a Spotify login.
///
/// Stores a CSRF secret in the session and redirects to the Spotify consent
/// screen.
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to Spotify
/// - `422 Unprocessable Entity` - Unknown platform
#[utoipa::path(
    get,
    path = "/auth/spotify/login",
    tag = AUTH_TAG,
    params(LoginParams),
    responses(
        (status = 307, description = "Redirect to the Spotify authorize page"),
        (status = 422, description = "Unknown platform", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let platform = LoginPlatform::parse(&params.platform)?;

    let service =
        SpotifyAuthService::new(&state.db, &state.oauth_client, state.spotify.as_ref());
    let (url, csrf) = service.login_url(platform);

    CsrfSession::new(&session).set_token(csrf).await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Finish a Spotify login.
///
/// Validates the CSRF state, exchanges the code, records the user and their
/// credentials, then redirects to the web or app callback with `token` and
/// `user` query parameters.
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to the client with the access token
/// - `422 Unprocessable Entity` - CSRF mismatch, malformed state or declined login
/// - `502 Bad Gateway` - Spotify rejected the code
#[utoipa::path(
    get,
    path = "/auth/spotify/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 307, description = "Redirect to the client callback"),
        (status = 422, description = "Login could not be validated", body = ErrorDto),
        (status = 502, description = "Spotify rejected the authorization code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let stored_csrf = CsrfSession::new(&session).take_token().await?;

    let Some(code) = params.code else {
        return Err(AppError::Validation(format!(
            "Spotify login was not completed: {}",
            params.error.as_deref().unwrap_or("no authorization code")
        )));
    };

    let service =
        SpotifyAuthService::new(&state.db, &state.oauth_client, state.spotify.as_ref());
    let outcome = service.callback(code, &params.state, stored_csrf).await?;

    let url = SpotifyAuthService::redirect_url(&state.config, &outcome)?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Get the authenticated user.
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - Missing or unknown bearer token
#[utoipa::path(
    get,
    path = "/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Missing or unknown bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&headers).await?;

    Ok(respond(StatusCode::OK, "Authenticated user", user.into_dto()))
}
