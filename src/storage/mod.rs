//! Storage Module
//!
//! Implements the in-memory key-value store backing the mock server.
//!
//! ## Core Concepts
//! - **Keys**: Arbitrary, case-sensitive, non-empty strings taken verbatim from request paths.
//! - **Values**: Opaque byte blobs (`Bytes`), possibly empty.
//! - **Access**: A single map-wide lock serializes mutations against every other operation.
//!   The lock is never held while a request is waiting on injected latency.
//! - **Lifetime**: One `MemoryStore` per process, created at startup and handed to the router.
//!   Nothing is persisted.

pub mod memory;

pub use memory::MemoryStore;
