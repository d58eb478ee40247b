//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, and CORS settings.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, meaning any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Check that the host is set and every CORS origin is a valid header value
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("http.host must not be empty".to_string());
        }
        for origin in &self.cors_origins {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| format!("invalid cors origin '{}': {}", origin, e))?;
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
