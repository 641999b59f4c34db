use axum::body::Bytes;
use axum::extract::Extension;
use axum::extract::rejection::BytesRejection;
use axum::http::header::CONTENT_LENGTH;
use axum::http::{HeaderMap, StatusCode, Uri};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::protocol::*;
use super::reply::JsonReply;
use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::storage::MemoryStore;

pub async fn handle_health() -> JsonReply<HealthResponse> {
    JsonReply(HealthResponse {
        status: STATUS_OK.to_string(),
        timestamp: epoch_seconds(),
    })
}

pub async fn handle_list(
    Extension(store): Extension<Arc<MemoryStore>>,
) -> JsonReply<ListResponse> {
    JsonReply(ListResponse {
        keys: store.list_keys(),
    })
}

pub async fn handle_read(
    Extension(store): Extension<Arc<MemoryStore>>,
    Extension(config): Extension<Arc<ServerConfig>>,
    uri: Uri,
) -> ApiResult<JsonReply<ReadResponse>> {
    let key = key_from_path(&uri, PREFIX_READ)?;

    // Must stay outside the store lock so other requests keep flowing.
    tokio::time::sleep(config.read_delay).await;

    let data = store.read(&key).ok_or_else(|| ApiError::not_found(&key))?;
    tracing::debug!("Read {} bytes from '{}'", data.len(), key);

    Ok(JsonReply(ReadResponse {
        key,
        data: STANDARD.encode(&data),
        size: data.len(),
    }))
}

pub async fn handle_write(
    Extension(store): Extension<Arc<MemoryStore>>,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<JsonReply<WriteResponse>> {
    let key = key_from_path(&uri, PREFIX_WRITE)?;

    // Chunked uploads carry no Content-Length and are refused like empty ones.
    if declared_content_length(&headers) == 0 {
        return Err(ApiError::BadRequest("No data provided".to_string()));
    }

    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(format!("Invalid request data: {}", rejection.body_text()))
        }
    })?;

    if body.is_empty() {
        return Err(ApiError::BadRequest("No data provided".to_string()));
    }

    let data = decode_write_body(&body)?;
    let size = data.len();
    store.write(key.clone(), data);
    tracing::info!("Stored {} bytes under '{}'", size, key);

    Ok(JsonReply(WriteResponse {
        key,
        status: STATUS_SUCCESS.to_string(),
        size,
    }))
}

pub async fn handle_delete(
    Extension(store): Extension<Arc<MemoryStore>>,
    uri: Uri,
) -> ApiResult<JsonReply<DeleteResponse>> {
    let key = key_from_path(&uri, PREFIX_DELETE)?;

    if !store.delete(&key) {
        return Err(ApiError::not_found(key));
    }
    tracing::info!("Deleted '{}'", key);

    Ok(JsonReply(DeleteResponse {
        key,
        status: STATUS_DELETED.to_string(),
    }))
}

/// Fallback for unknown paths and for unsupported methods on known ones.
pub async fn handle_route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Everything after `prefix` in the raw request path.
///
/// No percent-decoding or normalization: `/read/a%20b/c` yields `a%20b/c`.
pub fn key_from_path(uri: &Uri, prefix: &str) -> ApiResult<String> {
    match uri.path().strip_prefix(prefix) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(ApiError::RouteNotFound),
    }
}

/// `Content-Length` of the request, or 0 when absent or unreadable.
fn declared_content_length(headers: &HeaderMap) -> u64 {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Parses a `{"data": "<base64>"}` body into raw bytes.
///
/// Only a JSON object is accepted; serde would otherwise also take `["..."]` as the struct.
pub fn decode_write_body(body: &[u8]) -> ApiResult<Vec<u8>> {
    let invalid = |detail: String| ApiError::BadRequest(format!("Invalid request data: {}", detail));

    let object: Map<String, Value> =
        serde_json::from_slice(body).map_err(|e| invalid(e.to_string()))?;
    let request: WriteRequest =
        serde_json::from_value(Value::Object(object)).map_err(|e| invalid(e.to_string()))?;

    STANDARD
        .decode(request.data.as_bytes())
        .map_err(|e| invalid(e.to_string()))
}

fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
