//! Storage HTTP Protocol
//!
//! Endpoints and Data Transfer Objects (DTOs) of the mock storage API.
//!
//! Field names are part of the compatibility surface: client conformance tests inspect
//! the JSON bodies literally.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";
/// Enumerates all stored keys.
pub const ENDPOINT_LIST: &str = "/list";
/// Prefix for reads. Everything after it is the key, verbatim.
pub const PREFIX_READ: &str = "/read/";
/// Prefix for writes.
pub const PREFIX_WRITE: &str = "/write/";
/// Prefix for deletes.
pub const PREFIX_DELETE: &str = "/delete/";

pub const STATUS_OK: &str = "ok";
pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_DELETED: &str = "deleted";

// --- Data Transfer Objects ---

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since the Unix epoch, with sub-second precision.
    pub timestamp: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub keys: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadResponse {
    pub key: String,
    /// Standard Base64 (padded) encoding of the stored bytes.
    pub data: String,
    /// Length of the decoded payload in bytes.
    pub size: usize,
}

/// Body of a write request.
///
/// `data` is required. An empty string is valid and stores an empty value.
#[derive(Debug, Serialize, Deserialize)]
pub struct WriteRequest {
    pub data: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WriteResponse {
    pub key: String,
    pub status: String,
    pub size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub key: String,
    pub status: String,
}

/// Envelope of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Same value as the HTTP status line.
    pub code: u16,
}
