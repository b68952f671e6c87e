//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and handlers. It
//! wraps the domain specific errors and implements `IntoResponse`, rendering
//! every failure into the standard response envelope with a status code and a
//! machine readable `kind`.

pub mod auth;
pub mod config;
pub mod internal;
pub mod provider;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ApiResponse,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, provider::ProviderError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Every handler returns as soon as one of
/// these is produced.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations never land here; `From<DbErr>` turns them
    /// into `Conflict`. Results in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Session table migration error from the sqlx session store.
    #[error(transparent)]
    SqlxErr(#[from] tower_sessions_sqlx_store::sqlx::Error),

    /// Socket bind or serve error at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Spotify call failed. Results in 502 Bad Gateway.
    #[error(transparent)]
    ProviderErr(#[from] ProviderError),

    /// Unexpected internal state. Results in 500 Internal Server Error.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Request is malformed or breaks a business rule.
    ///
    /// Results in 422 Unprocessable Entity with the provided error message.
    #[error("{0}")]
    Validation(String),

    /// Resource already exists.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Authenticated user acting on a resource they do not own.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Forbidden(String),

    /// Operation did not finish before its deadline.
    ///
    /// Results in 503 Service Unavailable.
    #[error("{0}")]
    ServiceUnavailable(String),
}

/// Translates database errors, routing unique constraint violations to `Conflict`.
///
/// The constraint detail names tables and columns, so it is logged rather than
/// returned to the client.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint violated: {}", detail);
                AppError::Conflict("Resource already exists".to_string())
            }
            _ => AppError::DbErr(err),
        }
    }
}

/// Renders a failed response envelope.
pub(crate) fn error_response(status: StatusCode, kind: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiResponse::error(status.as_u16(), kind, message)),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401/422 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 422 Unprocessable Entity - For `Validation`
/// - 502 Bad Gateway - For `ProviderErr`, kind `upstream_auth` or `downstream`
/// - 503 Service Unavailable - For `ServiceUnavailable`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, "not_found", msg),
            Self::Validation(msg) => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, "validation", msg)
            }
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, "conflict", msg),
            Self::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, "forbidden", msg),
            Self::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                error_response(StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            }
            Self::ProviderErr(err) => {
                tracing::warn!("Spotify error: {}", err);
                error_response(StatusCode::BAD_GATEWAY, err.kind(), err.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never
/// reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_server",
            "Internal server error",
        )
    }
}
