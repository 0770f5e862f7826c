use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use clap::Parser;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DEV_SERVER_PORT: u16 = 5173;

/// Deployment settings, read once at start up from flags or the environment.
#[derive(Parser, Clone, Debug)]
pub struct Config {
    /// Base URL of the reservation backend.
    #[clap(env = "VITE_BACKEND_URL", long, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Request timeout in milliseconds.
    #[clap(env = "VITE_API_TIMEOUT", long, default_value_t = DEFAULT_API_TIMEOUT_MS)]
    pub api_timeout_ms: u64,

    #[clap(env = "DEV_SERVER_HOST", long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub dev_server_host: IpAddr,

    #[clap(env = "DEV_SERVER_PORT", long, default_value_t = DEFAULT_DEV_SERVER_PORT)]
    pub dev_server_port: u16,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }

    pub fn dev_server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.dev_server_host, self.dev_server_port)
    }

    pub fn dev_server_origin(&self) -> String {
        format!("http://{}", self.dev_server_addr())
    }

    pub fn with_backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = backend_url.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            api_timeout_ms: DEFAULT_API_TIMEOUT_MS,
            dev_server_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            dev_server_port: DEFAULT_DEV_SERVER_PORT,
        }
    }
}
