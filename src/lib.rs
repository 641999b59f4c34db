//! Mock Storage Server Library
//!
//! An in-memory, HTTP-addressable key-value store with injected read latency. It stands in
//! for a network-attached storage backend so that a storage client's caching, retry and
//! latency handling can be observed in end-to-end tests.
//!
//! ## Architecture Modules
//! The system is composed of two strictly layered components plus supporting modules:
//!
//! - **`storage`**: The `MemoryStore`, a thread-safe key to byte blob map guarded by a single lock.
//! - **`server`**: The HTTP protocol surface. Routes requests to store operations, handles
//!   Base64 transport encoding, injects read latency and maps outcomes to status codes.
//! - **`config`**: Bind address, read delay and body size limit.
//! - **`error`**: The request-level error taxonomy and its JSON envelope.

pub mod config;
pub mod error;
pub mod server;
pub mod storage;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use storage::MemoryStore;
