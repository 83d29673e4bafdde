//! API server configuration.

use tinylink_core::auth::session::resolve_session_secret;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8080").
    pub bind_addr: String,
    /// Session token signing secret.
    pub session_secret: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable         | Default                             |
    /// |------------------|-------------------------------------|
    /// | `BIND_ADDR`      | `127.0.0.1:8080`                    |
    /// | `SESSION_SECRET` | built-in development secret         |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into()),
            session_secret: resolve_session_secret(),
        }
    }
}
