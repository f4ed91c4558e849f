//! Run command implementation

use std::sync::Arc;

use chrono::Duration;
use clap::Args;
use tokio::sync::oneshot;

use crate::config::Config;
use crate::consumer::Consumer;
use crate::price::{CurrentPriceStore, HistoryLog};
use crate::stream::{StreamClient, StreamConfig, UpdateStream};
use crate::telemetry;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the broker channel to subscribe to
    #[arg(long)]
    pub channel: Option<String>,
}

impl RunArgs {
    /// Wire the stores, stream, and consumer, and run until shutdown
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        telemetry::install_metrics_exporter(config.telemetry.metrics_port)?;

        let current = Arc::new(CurrentPriceStore::new(Duration::seconds(
            config.store.price_ttl_secs,
        )));
        let history = Arc::new(HistoryLog::new(config.store.history_cap));

        let channel = self
            .channel
            .clone()
            .unwrap_or_else(|| config.broker.channel.clone());
        let stream = StreamClient::new(StreamConfig::new(config.broker.url.clone(), channel));
        let events = stream.subscribe().await?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let consumer = Consumer::new(current, history);
        let join = tokio::spawn(consumer.run(events, shutdown_rx));

        // Translate ctrl-c into a graceful consumer shutdown.
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received, stopping consumer");
                let _ = shutdown_tx.send(());
            }
        });

        join.await??;
        Ok(())
    }
}
