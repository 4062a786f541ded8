//! Env-driven configuration. The original deployment hardcoded its connection
//! parameters; they live in env vars here, with defaults matching that setup.

const DEFAULT_DATABASE_URL: &str = "mysql://root@localhost:3306/dreamingflowers";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Default 1: all requests share one store connection unless raised.
    pub max_connections: u32,
}

impl Config {
    /// Read from `DATABASE_URL`, `BIND_ADDR`, and `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> Self {
        Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }
}
