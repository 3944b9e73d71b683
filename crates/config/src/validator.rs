use crate::substitution::has_unresolved_env_vars;
use crate::AppConfig;
use thiserror::Error;

const LOG_FORMATS: &[&str] = &["pretty", "json", "compact"];

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Service name is required")]
    MissingServiceName,

    #[error("Database URL is required")]
    MissingDatabaseUrl,

    #[error("Database URL contains unresolved environment variables: {0}")]
    UnresolvedDatabaseUrl(String),

    #[error("database.max_connections must be a positive integer")]
    InvalidMaxConnections,

    #[error("Invalid log format: {0}. Must be one of: pretty, json, compact")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a loaded configuration, collecting every problem at once.
pub fn validate_config(config: &AppConfig) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.service.name.trim().is_empty() {
        errors.push(ValidationError::MissingServiceName);
    }

    if config.database.url.trim().is_empty() {
        errors.push(ValidationError::MissingDatabaseUrl);
    } else if has_unresolved_env_vars(&config.database.url) {
        errors.push(ValidationError::UnresolvedDatabaseUrl(
            config.database.url.clone(),
        ));
    }

    if config.database.max_connections == 0 {
        errors.push(ValidationError::InvalidMaxConnections);
    }

    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        errors.push(ValidationError::InvalidLogFormat(
            config.logging.format.clone(),
        ));
    }

    if config.http.port == 0 {
        warnings.push(ValidationWarning {
            field: "http.port".to_string(),
            message: "Port 0 binds an ephemeral port; clients will not find the service at a known address".to_string(),
        });
    }

    ValidationReport { errors, warnings }
}
