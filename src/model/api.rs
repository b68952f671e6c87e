use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope wrapping every API payload.
///
/// Successful responses carry `data`; failed responses carry `error` and leave
/// `data` out.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDto>,
}

impl<T> ApiResponse<T> {
    /// Builds a successful envelope around `data`.
    pub fn ok(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            status_code,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Builds a failed envelope. `kind` is the machine readable error class.
    pub fn error(status_code: u16, kind: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            message: message.clone(),
            data: None,
            status_code,
            error: Some(ErrorDto {
                code: status_code,
                kind: kind.to_string(),
                message,
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub code: u16,
    pub kind: String,
    pub message: String,
}

/// Fresh Spotify credentials returned to the owner after a transparent refresh.
///
/// Only the Spotify access token changed. The API bearer token stays valid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub database: String,
}
