use clap::Parser;
use price_relay::cli::{Cli, Commands};
use price_relay::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    price_relay::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting price ingestion service");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Broker: {} channel={}",
                config.broker.url, config.broker.channel
            );
            println!(
                "  Store: price_ttl={}s history_cap={}",
                config.store.price_ttl_secs, config.store.history_cap
            );
            println!(
                "  Telemetry: metrics_port={} log_level={}",
                config.telemetry.metrics_port, config.telemetry.log_level
            );
        }
    }

    Ok(())
}
