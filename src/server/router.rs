use anyhow::Context;
use axum::extract::{DefaultBodyLimit, Extension};
use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::handlers::*;
use super::middleware::{catch_panic, log_request};
use super::protocol::*;
use crate::config::ServerConfig;
use crate::storage::MemoryStore;

/// Builds the HTTP router around an explicitly provided store.
///
/// Keyed routes use catch-all segments so keys may contain further slashes.
/// Every method router falls back to 404 so unsupported methods never surface as 405.
pub fn build_router(store: Arc<MemoryStore>, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .route(
            ENDPOINT_HEALTH,
            get(handle_health).fallback(handle_route_not_found),
        )
        .route(
            ENDPOINT_LIST,
            get(handle_list).fallback(handle_route_not_found),
        )
        .route(
            &format!("{}*key", PREFIX_READ),
            get(handle_read).fallback(handle_route_not_found),
        )
        .route(
            &format!("{}*key", PREFIX_WRITE),
            post(handle_write).fallback(handle_route_not_found),
        )
        .route(
            &format!("{}*key", PREFIX_DELETE),
            delete(handle_delete).fallback(handle_route_not_found),
        )
        .fallback(handle_route_not_found);

    with_layers(routes, store, config)
}

/// Wraps `routes` in the shared state and middleware stack.
///
/// Request logging is outermost so it records the 500 produced for a caught panic.
pub(crate) fn with_layers(routes: Router, store: Arc<MemoryStore>, config: &ServerConfig) -> Router {
    routes
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(Extension(store))
        .layer(Extension(Arc::new(config.clone())))
        .layer(middleware::from_fn(catch_panic))
        .layer(middleware::from_fn(log_request))
}

/// Serves `router` on an already bound listener until `shutdown` resolves.
///
/// Each connection runs on its own task; peer addresses are exposed to the logging layer.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}

/// Creates the process-wide store, binds `host:port` and serves until Ctrl+C.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let router = build_router(store.clone(), &config);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!("Mock storage server starting on http://{}", bind_addr);
    tracing::info!("Read delay: {:?}", config.read_delay);

    serve(listener, router, shutdown_signal()).await?;

    tracing::info!(
        "Server stopped, discarding {} keys ({} bytes)",
        store.len(),
        store.total_bytes()
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        // Without a signal handler the server just runs until killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Server stopping...");
}
