//! Broker stream module
//!
//! WebSocket subscription to the broker's named price-update channel

mod client;
mod types;

pub use client::StreamClient;
pub use types::{StreamConfig, StreamError, StreamEvent};

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Trait for broker channel subscriptions
#[async_trait]
pub trait UpdateStream: Send + Sync {
    /// Subscribe and return a receiver for stream events
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<StreamEvent>>;
}

#[async_trait]
impl UpdateStream for StreamClient {
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<StreamEvent>> {
        Ok(self.connect())
    }
}
