use oauth2::{CsrfToken, Scope};
use sea_orm::{DatabaseConnection, TransactionTrait};
use url::Url;

use crate::server::{
    config::Config,
    data::{oauth_token::OauthTokenRepository, user::UserRepository},
    error::{auth::AuthError, config::ConfigError, provider::ProviderError, AppError},
    model::{
        token::{StoredToken, UpsertTokenParam},
        user::{CreateSpotifyUserParam, User},
    },
    spotify::SpotifyProvider,
    state::OAuth2Client,
    util::code::generate_api_token,
};

/// Spotify scopes requested at login.
const SCOPES: [&str; 4] = [
    "playlist-modify-public",
    "playlist-modify-private",
    "user-read-private",
    "user-read-email",
];

/// Client a login was started from; decides where the callback redirects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPlatform {
    Web,
    App,
}

impl LoginPlatform {
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        match value {
            "web" => Ok(Self::Web),
            "app" => Ok(Self::App),
            other => Err(AuthError::UnknownPlatform(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::App => "app",
        }
    }
}

/// Splits an OAuth `state` value of the form `<csrf>-<platform>`.
///
/// The CSRF secret may itself contain `-`, so the split happens on the last one.
pub fn parse_state(state: &str) -> Result<(&str, LoginPlatform), AuthError> {
    let (csrf, platform) = state
        .rsplit_once('-')
        .filter(|(csrf, _)| !csrf.is_empty())
        .ok_or_else(|| AuthError::MalformedState(state.to_string()))?;

    Ok((csrf, LoginPlatform::parse(platform)?))
}

/// Outcome of a completed login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    /// Bearer credential for this API. Unaffected by later Spotify refreshes.
    pub api_token: String,
    pub token: StoredToken,
    pub platform: LoginPlatform,
}

/// Service for the Spotify OAuth2 login flow.
///
/// Builds the authorize URL, validates the callback and records the user and
/// their credentials.
pub struct SpotifyAuthService<'a> {
    db: &'a DatabaseConnection,
    oauth_client: &'a OAuth2Client,
    provider: &'a dyn SpotifyProvider,
}

impl<'a> SpotifyAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        oauth_client: &'a OAuth2Client,
        provider: &'a dyn SpotifyProvider,
    ) -> Self {
        Self {
            db,
            oauth_client,
            provider,
        }
    }

    /// Generates the Spotify authorize URL for a login started from `platform`.
    ///
    /// # Returns
    /// - `(Url, String)` - Authorize URL and the CSRF secret to keep in the session
    pub fn login_url(&self, platform: LoginPlatform) -> (Url, String) {
        let csrf = CsrfToken::new_random();
        let state = format!("{}-{}", csrf.secret(), platform.as_str());

        let (authorize_url, _) = self
            .oauth_client
            .authorize_url(|| CsrfToken::new(state))
            .add_scopes(SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url();

        (authorize_url, csrf.secret().to_string())
    }

    /// Completes a login.
    ///
    /// Validates the state against the CSRF secret taken from the session, exchanges
    /// the code, fetches the profile, then creates the user if needed and stores
    /// the credentials in one transaction. A user without an API token is issued
    /// one; an existing API token is kept so other signed in clients stay valid.
    ///
    /// # Arguments
    /// - `code` - Authorization code from the callback
    /// - `state` - `state` parameter from the callback
    /// - `stored_csrf` - CSRF secret kept in the session, if any
    ///
    /// # Returns
    /// - `Ok(LoginOutcome)` - Logged in user, their API token and stored credentials
    /// - `Err(AppError::AuthErr)` - Malformed state or CSRF mismatch
    /// - `Err(AppError::ProviderErr)` - Code exchange or profile fetch failed, or
    ///   the token lifetime is out of range
    /// - `Err(AppError::Conflict)` - Concurrent first login for the same account
    pub async fn callback(
        &self,
        code: String,
        state: &str,
        stored_csrf: Option<String>,
    ) -> Result<LoginOutcome, AppError> {
        let (csrf, platform) = parse_state(state)?;
        if stored_csrf.as_deref() != Some(csrf) {
            return Err(AuthError::CsrfValidationFailed.into());
        }

        let token = self.provider.exchange_code(code).await?;
        let refresh_token = token.refresh_token.clone().ok_or_else(|| {
            ProviderError::TokenExchange("Spotify returned no refresh token".to_string())
        })?;
        let profile = self.provider.current_user(&token.access_token).await?;

        let expires_at = token.expires_at(chrono::Utc::now())?;

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);
        let user = user_repo
            .get_or_create(CreateSpotifyUserParam {
                display_name: profile.display_name.unwrap_or_else(|| profile.id.clone()),
                email: profile.email.unwrap_or_default(),
                spotify_id: profile.id,
            })
            .await?;
        let api_token = match user_repo.find_api_token(user.id).await? {
            Some(api_token) => api_token,
            None => {
                let api_token = generate_api_token();
                user_repo.set_api_token(user.id, &api_token).await?;
                api_token
            }
        };
        let stored = OauthTokenRepository::new(&txn)
            .upsert(UpsertTokenParam {
                user_id: user.id,
                access_token: token.access_token,
                refresh_token,
                expires_at,
            })
            .await?;
        txn.commit().await?;

        tracing::info!(user_id = user.id, platform = platform.as_str(), "User logged in");

        Ok(LoginOutcome {
            user,
            api_token,
            token: stored,
            platform,
        })
    }

    /// Builds the post-login redirect carrying the API token and user id.
    pub fn redirect_url(config: &Config, outcome: &LoginOutcome) -> Result<Url, AppError> {
        let (name, base) = match outcome.platform {
            LoginPlatform::Web => ("FRONTEND_CALLBACK_URL", &config.frontend_callback_url),
            LoginPlatform::App => ("APP_CALLBACK_URL", &config.app_callback_url),
        };

        let mut url = Url::parse(base).map_err(|source| ConfigError::InvalidUrl {
            name: name.to_string(),
            source,
        })?;
        url.query_pairs_mut()
            .append_pair("token", &outcome.api_token)
            .append_pair("user", &outcome.user.id.to_string());

        Ok(url)
    }
}
