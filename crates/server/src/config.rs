//! Server configuration.

use crate::error::{Result, ServerError};
use std::net::SocketAddr;

/// Default HTTP port for the catalog service.
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Bind configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// HTTP port. Port 0 binds an ephemeral port.
    pub port: u16,
}

impl ServerConfig {
    /// Create a new server config.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_addr() {
        let config = ServerConfig::new("127.0.0.1", 8080);
        let addr = config.addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_config_invalid_host() {
        let config = ServerConfig::new("not a host", 8080);
        assert!(matches!(
            config.addr(),
            Err(ServerError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, DEFAULT_HTTP_PORT);
    }
}
