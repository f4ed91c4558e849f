//! CLI interface for price-relay
//!
//! Provides subcommands for:
//! - `run`: start the price ingestion service
//! - `config`: show effective configuration

mod run;

pub use run::RunArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "price-relay")]
#[command(about = "Price propagation and history service for the trading backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the price ingestion service
    Run(RunArgs),
    /// Show effective configuration
    Config,
}
