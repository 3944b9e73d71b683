//! Instrument catalog server binary.
//!
//! Provides commands for initializing and validating configuration and
//! starting the catalog HTTP server.

use anyhow::{Context, Result};
use catalog::{catalog_routes, CatalogService, PostgresInstrumentStore};
use cli::{Cli, Commands};
use config::{generate_default_config, load_config, save_config, validate_config, AppConfig};
use observability::{init_logging, LogFormat};
use server::{health_routes, HttpServer, ServerConfig, ServerExt};
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Serve { config, host, port } => serve(config, host, port).await,
        Commands::Validate { config } => validate_command(config).await,
        Commands::Init { output } => init_command(output).await,
    }
}

async fn serve<P: AsRef<Path>>(
    config_path: P,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    let config = load_config(&config_path)?;

    let format = LogFormat::parse(&config.logging.format).unwrap_or_default();
    init_logging("catalogd", format)?;

    check_validation(&config)?;

    let host = host_override.unwrap_or_else(|| config.http.host.clone());
    let port = port_override.unwrap_or(config.http.port);

    info!(%host, port, "Starting instrument catalog");

    let store = PostgresInstrumentStore::new(&config.database.url, config.database.max_connections)
        .await?;
    store.run_migrations().await?;

    let service = Arc::new(CatalogService::new(Arc::new(store)));
    let app = catalog_routes(service)
        .merge(health_routes())
        .layer(TraceLayer::new_for_http());

    let server = HttpServer::new(ServerConfig::new(host, port), app);
    server.run_with_ctrl_c().await?;

    Ok(())
}

fn check_validation(config: &AppConfig) -> Result<()> {
    let report = validate_config(config);

    if !report.warnings.is_empty() {
        warn!("Configuration warnings:");
        for warning in &report.warnings {
            warn!(field = %warning.field, message = %warning.message);
        }
    }

    if !report.is_valid() {
        error!(
            error_count = report.errors.len(),
            "Configuration validation failed"
        );
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot start catalog due to configuration errors");
    }

    Ok(())
}

async fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    init_logging("catalogd", LogFormat::Pretty)?;
    info!(path = ?config_path.as_ref(), "Validating configuration");

    let config = load_config(&config_path)?;
    let report = validate_config(&config);

    println!("\n=== Configuration Validation Report ===\n");

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] [{}] {}", warning.field, warning.message);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("Configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Service: {}", config.service.name);
    println!("Bind: {}:{}", config.http.host, config.http.port);
    println!("Database pool size: {}", config.database.max_connections);

    Ok(())
}

async fn init_command<P: AsRef<Path>>(output_path: P) -> Result<()> {
    init_logging("catalogd", LogFormat::Pretty)?;
    let output_path = output_path.as_ref();
    info!(?output_path, "Initializing new configuration file");

    let config = generate_default_config();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    save_config(&config, output_path)?;

    println!("[ok] Configuration file created successfully!");
    println!();
    println!("Location: {:?}", output_path);
    println!();
    println!("Next steps:");
    println!("  1. Set DATABASE_URL to a reachable Postgres instance");
    println!(
        "  2. Run 'catalogd validate --config {:?}' to check configuration",
        output_path
    );
    println!(
        "  3. Run 'catalogd serve --config {:?}' to start the catalog",
        output_path
    );

    Ok(())
}
