use clap::Parser;
use mock_storage::config::{
    DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, DEFAULT_READ_DELAY_MS,
};
use mock_storage::{ServerConfig, server};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// In-memory storage server with injected read latency, for client end-to-end tests
#[derive(Parser, Debug)]
#[command(name = "mock-storage-server")]
#[command(version)]
struct Args {
    /// Host to bind
    #[arg(default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Delay applied to every read request, in milliseconds
    #[arg(long, default_value_t = DEFAULT_READ_DELAY_MS)]
    read_delay_ms: u64,

    /// Maximum accepted write request body, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let config = ServerConfig::builder()
        .host(args.host)
        .port(args.port)
        .read_delay(Duration::from_millis(args.read_delay_ms))
        .max_body_bytes(args.max_body_bytes)
        .build();

    server::run(config).await
}
