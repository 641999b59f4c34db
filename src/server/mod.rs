//! Storage HTTP Server Module
//!
//! Translates HTTP requests into `MemoryStore` operations and back into JSON responses.
//!
//! ## Responsibilities
//! - **Routing**: Method + fixed path prefix dispatch. Keys are the verbatim path remainder.
//! - **Encoding**: Payloads travel as Base64 strings inside JSON bodies.
//! - **Latency injection**: Reads sleep for the configured delay before touching the store,
//!   without holding its lock, so concurrent requests are not blocked.
//! - **Error mapping**: Every failure becomes an `{error, code}` envelope; panics become 500s.
//!
//! ## Submodules
//! - **`handlers`**: Axum handlers, one per endpoint.
//! - **`middleware`**: Panic catching and request logging layers.
//! - **`protocol`**: Endpoint paths and DTOs.
//! - **`reply`**: Response envelopes and CORS headers.
//! - **`router`**: Router factory and serving loop.

pub mod handlers;
pub mod middleware;
pub mod protocol;
pub mod reply;
pub mod router;

pub use router::{build_router, run, serve};
