use crate::substitution;
use crate::{AppConfig, DatabaseConfig, HttpConfig, LoggingConfig, ServiceConfig};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

#[instrument(skip(path))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    info!("Loading configuration from: {:?}", path);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)?;
    info!("Configuration loaded successfully");
    Ok(config)
}

/// Parse configuration content: env substitution, then YAML.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let substituted = substitution::substitute_env_vars(content)?;
    debug!("Environment variable substitution completed");

    let config: AppConfig = serde_yaml::from_str(&substituted)
        .with_context(|| "Failed to parse YAML configuration")?;

    Ok(config)
}

#[instrument]
pub fn generate_default_config() -> AppConfig {
    AppConfig {
        service: ServiceConfig {
            name: "instrument-catalog".to_string(),
            description: "A CRUD reference service for instrument records".to_string(),
        },
        http: HttpConfig::default(),
        database: DatabaseConfig {
            url: "${DATABASE_URL}".to_string(),
            max_connections: 20,
        },
        logging: LoggingConfig::default(),
    }
}

#[instrument]
pub fn save_config<P: AsRef<Path> + std::fmt::Debug>(config: &AppConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Saving configuration to: {:?}", path);

    let yaml = serde_yaml::to_string(config)
        .with_context(|| "Failed to serialize configuration to YAML")?;

    fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    info!("Configuration saved successfully");
    Ok(())
}
