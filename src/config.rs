//! Server Configuration
//!
//! Centralized settings with defaults matching the documented command line contract.

use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_READ_DELAY_MS: u64 = 500;
/// Fixed latency injected in front of every read.
pub const DEFAULT_READ_DELAY: Duration = Duration::from_millis(DEFAULT_READ_DELAY_MS);
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host name or IP address to bind.
    pub host: String,
    pub port: u16,
    /// Delay applied by the read handler before it touches the store.
    pub read_delay: Duration,
    /// Upper bound on accepted write request bodies.
    /// Base64 inflates payloads by a third, so this is not the stored size limit.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            read_delay: DEFAULT_READ_DELAY,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// `host:port` in the form accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn read_delay(mut self, delay: Duration) -> Self {
        self.config.read_delay = delay;
        self
    }

    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.config.max_body_bytes = limit;
        self
    }

    pub fn build(self) -> ServerConfig {
        self.config
    }
}
