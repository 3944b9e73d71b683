//! Application configuration for the catalog service.
//!
//! Configuration is a YAML file with `${VAR}` environment substitution,
//! loaded once at startup and validated before the server is wired up.

use serde::{Deserialize, Serialize};

pub mod parser;
pub mod substitution;
pub mod validator;

pub use parser::{generate_default_config, load_config, parse_config, save_config};
pub use substitution::{has_unresolved_env_vars, substitute_env_vars};
pub use validator::{validate_config, ValidationError, ValidationReport, ValidationWarning};

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    #[serde(default)]
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Service identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Postgres connection URL; typically supplied as `${DATABASE_URL}`.
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Output format: pretty, json, or compact.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    20
}

fn default_log_format() -> String {
    "pretty".to_string()
}
