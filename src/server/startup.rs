use axum::http::HeaderValue;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

const DEFAULT_LOG_FILTER: &str = "playlist_collab=info,tower_http=info";

/// Initialises the global tracing subscriber.
///
/// Uses `RUST_LOG` when set and falls back to logging this crate and HTTP
/// traces at `info`. With `log_json` every line is emitted as a JSON object.
pub fn init_tracing(log_json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    if log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions only carry the CSRF secret between the login redirect and the
/// Spotify callback, so they expire after a short period of inactivity. The
/// cookie uses `SameSite=Lax` because the callback arrives as a cross-site
/// navigation from Spotify.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer with the session table migrated
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(15))))
}

/// Builds the HTTP client used for Spotify calls.
///
/// Redirects are disabled; the token endpoint must answer directly.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the Spotify accounts service.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize, token and redirect URLs set
/// - `Err(ConfigError::InvalidUrl)` - One of the configured URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str| {
        let name = name.to_string();
        move |source: url::ParseError| ConfigError::InvalidUrl { name, source }
    };

    let auth_url = AuthUrl::new(config.spotify_auth_url.clone())
        .map_err(invalid("SPOTIFY_AUTH_URL"))?;
    let token_url = TokenUrl::new(config.spotify_token_url.clone())
        .map_err(invalid("SPOTIFY_TOKEN_URL"))?;
    let redirect_url = RedirectUrl::new(config.spotify_redirect_url.clone())
        .map_err(invalid("SPOTIFY_REDIRECT_URL"))?;

    let client = BasicClient::new(ClientId::new(config.spotify_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.spotify_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Builds the CORS layer.
///
/// Restricted to `CORS_ALLOWED_ORIGIN` when set, otherwise any origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let cors = match &config.cors_allowed_origin {
        Some(origin) => {
            let origin = origin.parse::<HeaderValue>().map_err(|_| {
                ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    value: origin.clone(),
                }
            })?;
            cors.allow_origin(origin)
        }
        None => cors.allow_origin(Any),
    };

    Ok(cors)
}
