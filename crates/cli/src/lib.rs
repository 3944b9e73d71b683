use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalogd")]
#[command(about = "Instrument catalog - a CRUD reference service")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the catalog HTTP server
    Serve {
        /// Path to the configuration file
        #[arg(short, long, default_value = "catalog.yaml")]
        config: PathBuf,

        /// Override bind host
        #[arg(long)]
        host: Option<String>,

        /// Override HTTP port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate configuration without starting the server
    Validate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "catalog.yaml")]
        config: PathBuf,
    },

    /// Initialize a new configuration file with defaults
    Init {
        /// Output path for the new configuration file
        #[arg(short, long, default_value = "catalog.yaml")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
