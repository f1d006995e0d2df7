//! Upstream failure taxonomy and client-facing error responses.
//!
//! Fetch-side code returns [`FetchError`] values untranslated; the mapping
//! onto HTTP status codes and response bodies happens exactly once, at the
//! endpoint boundary, via [`ErrorResponse::classify`]. Rate limiting and
//! missing resources are the only cases given caller-actionable detail;
//! everything else stays opaque.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::pager::ListingKind;

/// A failed upstream fetch, as seen by the page walker and token manager.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream rate limit hit, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("requested resource does not exist upstream")]
    NotFound,

    #[error("upstream API responded with status {0}")]
    Api(StatusCode),

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The outward error: a stable status code plus a short, non-leaking detail
/// message, rendered as a JSON body `{"detail": ...}`.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub detail: String,
}

impl ErrorResponse {
    /// Maps an upstream failure onto the client-facing error for the
    /// endpoint that was invoked. Rules are checked in order: rate limit,
    /// not found, other upstream API failure, anything else.
    pub fn classify(err: &FetchError, kind: ListingKind) -> Self {
        match err {
            FetchError::RateLimited { retry_after } => ErrorResponse {
                status: StatusCode::TOO_MANY_REQUESTS,
                detail: format!("Rate limit hit. Retry after {} seconds.", retry_after),
            },
            FetchError::NotFound => ErrorResponse {
                status: StatusCode::NOT_FOUND,
                detail: format!("{} not found", kind.label()),
            },
            FetchError::Api(_) => ErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: format!("{} API error", kind.label()),
            },
            FetchError::Transport(_) => ErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: "Unexpected error".to_string(),
            },
        }
    }

    /// Rejection for a request that omitted a required query parameter.
    pub fn missing_param(name: &str) -> Self {
        ErrorResponse {
            status: StatusCode::BAD_REQUEST,
            detail: format!("Missing required query parameter '{}'", name),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
