//! Configuration management for the contact form.
//!
//! Values come from environment variables, with a `.env` file loaded first if one
//! is present. Every setting has a default so a bare `cargo run` serves locally.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:3000";

/// Configuration shared by the endpoint binary and the form client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the endpoint listens on (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,

    /// Base URL the form submits to (default: http://127.0.0.1:3000)
    pub endpoint_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BIND_ADDR`: listen address for the endpoint
    /// - `CONTACT_ENDPOINT_URL`: base URL used by the form client
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds
    /// - `LOG_LEVEL`: logging level
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let bind_addr = env::var("CONTACT_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "CONTACT_BIND_ADDR".to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:3000, got: {}", bind_addr),
            })?;

        let endpoint_url = env::var("CONTACT_ENDPOINT_URL")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string());
        if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_ENDPOINT_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            bind_addr,
            endpoint_url,
            request_timeout,
            log_level,
        })
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
