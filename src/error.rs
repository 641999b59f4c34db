//! Error types for request handling
//!
//! Every failure inside a request ends up as an `ApiError`, which renders itself as the
//! `{error, code}` JSON envelope. None of them escape the request scope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::reply::error_response;

/// Result type alias for handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested key is absent on read or delete.
    #[error("Key '{key}' not found")]
    NotFound { key: String },

    /// Malformed or missing write body, invalid Base64.
    #[error("{0}")]
    BadRequest(String),

    /// Write body larger than the configured limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// No route for this method and path.
    #[error("Not Found")]
    RouteNotFound,

    /// Anything else, including panics caught by the middleware.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Unexpected(message) => tracing::error!("Request failed: {}", message),
            ApiError::BadRequest(message) | ApiError::PayloadTooLarge(message) => {
                tracing::warn!("Rejected request: {}", message)
            }
            ApiError::NotFound { .. } | ApiError::RouteNotFound => {
                tracing::debug!("{}", self)
            }
        }
        error_response(status, self.to_string())
    }
}
