use axum::http::StatusCode;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::protocol::ErrorResponse;
use crate::error::ApiError;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// 200 response carrying a JSON body plus the full set of CORS headers.
#[derive(Debug)]
pub struct JsonReply<T>(pub T);

impl<T: Serialize> IntoResponse for JsonReply<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                StatusCode::OK,
                [
                    (CONTENT_TYPE, JSON_CONTENT_TYPE),
                    (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGIN),
                    (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
                    (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
                ],
                body,
            )
                .into_response(),
            Err(e) => ApiError::Unexpected(format!("Failed to encode response: {}", e))
                .into_response(),
        }
    }
}

/// Error envelope. Only the origin header is advertised on errors.
pub(crate) fn error_response(status: StatusCode, message: String) -> Response {
    let envelope = ErrorResponse {
        error: message,
        code: status.as_u16(),
    };

    match serde_json::to_vec(&envelope) {
        Ok(body) => (
            status,
            [
                (CONTENT_TYPE, JSON_CONTENT_TYPE),
                (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGIN),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode error envelope: {}", e);
            (status, envelope.error).into_response()
        }
    }
}
