use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_EXPIRY_SKEW_SECONDS: i64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_redirect_url: String,

    pub spotify_auth_url: String,
    pub spotify_token_url: String,
    pub spotify_api_url: String,

    /// Where web logins are sent after the callback completes.
    pub frontend_callback_url: String,
    /// Where app logins are sent after the callback completes.
    pub app_callback_url: String,

    /// Tokens expiring within this window are refreshed before use.
    pub token_expiry_skew: chrono::Duration,
    /// Upper bound on the deadline of a single playlist operation.
    pub request_timeout: Duration,

    pub cors_allowed_origin: Option<String>,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let skew_seconds: i64 = parse_or(
            &lookup,
            "TOKEN_EXPIRY_SKEW_SECONDS",
            DEFAULT_TOKEN_EXPIRY_SKEW_SECONDS,
        )?;
        let timeout_seconds: u64 = parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECONDS",
            DEFAULT_REQUEST_TIMEOUT_SECONDS,
        )?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            spotify_redirect_url: required("SPOTIFY_REDIRECT_URL")?,
            spotify_auth_url: lookup("SPOTIFY_AUTH_URL")
                .unwrap_or_else(|| SPOTIFY_AUTH_URL.to_string()),
            spotify_token_url: lookup("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|| SPOTIFY_TOKEN_URL.to_string()),
            spotify_api_url: lookup("SPOTIFY_API_URL")
                .unwrap_or_else(|| SPOTIFY_API_URL.to_string()),
            frontend_callback_url: required("FRONTEND_CALLBACK_URL")?,
            app_callback_url: required("APP_CALLBACK_URL")?,
            token_expiry_skew: chrono::Duration::seconds(skew_seconds),
            request_timeout: Duration::from_secs(timeout_seconds),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN"),
            log_json: parse_or(&lookup, "LOG_JSON", false)?,
        })
    }
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
    }
}
