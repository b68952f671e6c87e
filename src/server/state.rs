//! Application state shared across all request handlers.
//!
//! `AppState` holds every shared resource a handler needs. It is built once at
//! startup and cloned into each request by Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - OAuth2 client for building the Spotify login URL
//! - The Spotify provider used for token exchange, refresh and Web API calls
//! - Configuration values read by the services

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::Config, spotify::SpotifyProvider};

/// Type alias for the OAuth2 client configured for Spotify authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `OAuth2Client` is designed to be cloned
/// - `Arc<dyn SpotifyProvider>` and `Arc<Config>` are reference-counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// OAuth2 client for the Spotify login redirect.
    ///
    /// Used to build the authorize URL. Code exchange and refresh go through
    /// `spotify` so they can be substituted in tests.
    pub oauth_client: OAuth2Client,

    /// Spotify accounts and Web API access.
    ///
    /// Every call that needs a user's credentials goes through the token refresh
    /// guard before reaching this provider.
    pub spotify: Arc<dyn SpotifyProvider>,

    /// Application configuration loaded at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `oauth_client` - OAuth2 client for Spotify login
    /// - `spotify` - Provider used for all Spotify calls
    /// - `config` - Loaded configuration
    pub fn new(
        db: DatabaseConnection,
        oauth_client: OAuth2Client,
        spotify: Arc<dyn SpotifyProvider>,
        config: Config,
    ) -> Self {
        Self {
            db,
            oauth_client,
            spotify,
            config: Arc::new(config),
        }
    }
}
