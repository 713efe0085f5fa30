//! Process configuration.
//!
//! The server takes one externally supplied setting: the port to listen
//! on, read from `PORT`. The bind host can be overridden with
//! `MATCHPOINT_BIND` for local runs.

use std::env;

/// Port used when `PORT` is unset or unparseable.
const DEFAULT_PORT: u16 = 3000;

/// Host used when `MATCHPOINT_BIND` is unset.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host/interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("MATCHPOINT_BIND").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let port = port.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT);
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        Self { host, port }
    }

    /// Returns the `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}
