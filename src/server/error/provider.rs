use thiserror::Error;

/// Failures talking to Spotify.
///
/// Credential failures (`TokenExchange`, `TokenRefresh`, `InvalidExpiry`) are reported as
/// `upstream_auth`; every other failure is `downstream`. Both map to
/// 502 Bad Gateway.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The authorization code could not be exchanged for tokens.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// Spotify refused or failed the refresh token grant.
    ///
    /// Usually means the user revoked access; they must log in again.
    #[error("Failed to refresh access token: {0}")]
    TokenRefresh(String),

    /// Spotify reported a token lifetime that does not fit a timestamp.
    #[error("Token lifetime of {0:?} is out of range")]
    InvalidExpiry(std::time::Duration),

    /// The HTTP request to a Web API endpoint failed before a response arrived.
    #[error("Request to Spotify {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A Web API endpoint answered with a non-success status.
    #[error("Spotify {endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
}

impl ProviderError {
    /// Machine readable error class used in the response envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TokenExchange(_) | Self::TokenRefresh(_) | Self::InvalidExpiry(_) => {
                "upstream_auth"
            }
            Self::Request { .. } | Self::Status { .. } => "downstream",
        }
    }
}
