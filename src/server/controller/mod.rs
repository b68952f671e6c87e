//! HTTP request handlers.
//!
//! Handlers authenticate the caller, convert DTOs into service parameters, call
//! a service and wrap the result in the `ApiResponse` envelope. Errors are
//! rendered by `AppError`'s `IntoResponse` implementation.

pub mod auth;
pub mod event;
pub mod health;
pub mod playlist;
pub mod song;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::model::api::ApiResponse;

/// Wraps `data` in a successful envelope with a matching status code.
pub(crate) fn respond<T: Serialize>(
    status: StatusCode,
    message: &str,
    data: T,
) -> impl IntoResponse {
    (status, Json(ApiResponse::ok(status.as_u16(), message, data)))
}
