//! Per-operation deadlines.
//!
//! Playlist mutations run under a deadline. When it elapses the operation's
//! future is dropped, which drops any open transaction and rolls it back.

use axum::http::HeaderMap;
use std::{future::Future, time::Duration};

use crate::server::error::AppError;

/// Header a caller may set to shorten the deadline of its request.
pub const REQUEST_TIMEOUT_HEADER: &str = "x-request-timeout-ms";

/// Deadline for the current request.
///
/// The configured request timeout, lowered to the caller's
/// `X-Request-Timeout-Ms` when that header holds a smaller positive number.
/// Unparsable header values are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestDeadline(pub Duration);

impl RequestDeadline {
    /// Reads `X-Request-Timeout-Ms` from `headers`.
    pub fn from_headers(headers: &HeaderMap, configured: Duration) -> Self {
        let requested = headers
            .get(REQUEST_TIMEOUT_HEADER)
            .and_then(|value| value.to_str().ok());

        Self::resolve(configured, requested)
    }

    pub fn resolve(configured: Duration, requested_ms: Option<&str>) -> Self {
        let requested = requested_ms
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        match requested {
            Some(requested) if requested < configured => Self(requested),
            _ => Self(configured),
        }
    }
}

/// Runs `operation`, failing with `ServiceUnavailable` if it does not finish in time.
pub async fn with_deadline<T, F>(deadline: Duration, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result,
        Err(_) => Err(AppError::ServiceUnavailable(
            "Request deadline exceeded".to_string(),
        )),
    }
}
