//! Broker WebSocket client
//!
//! Connects once, subscribes to the configured channel, and forwards frames
//! until the connection ends. There is no reconnection: a lost connection
//! terminates the stream, and the consumer with it; restarting is an
//! operational concern of the supervisor.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::types::{StreamConfig, StreamError, StreamEvent};

/// WebSocket client for a single broker channel subscription
pub struct StreamClient {
    config: StreamConfig,
}

impl StreamClient {
    /// Create a client with the given configuration
    pub fn new(config: StreamConfig) -> Self {
        Self { config }
    }

    /// Get the configured broker URL
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Connect and return a receiver for stream events
    ///
    /// Spawns a background task owning the connection. The task exits when
    /// the connection ends or the receiver is dropped; a `Disconnected`
    /// event is emitted before the channel closes.
    pub fn connect(&self) -> mpsc::Receiver<StreamEvent> {
        let (tx, rx) = mpsc::channel(1024);
        let config = self.config.clone();

        tokio::spawn(async move {
            if let Err(e) = Self::run_connection(config, &tx).await {
                tracing::error!(error = %e, "Broker stream terminated");
            }
            let _ = tx.send(StreamEvent::Disconnected).await;
        });

        rx
    }

    /// Build the subscribe frame for a channel
    fn subscribe_frame(channel: &str) -> String {
        serde_json::json!({ "op": "subscribe", "channel": channel }).to_string()
    }

    /// Connect, subscribe, and stream frames until the connection ends
    async fn run_connection(
        config: StreamConfig,
        tx: &mpsc::Sender<StreamEvent>,
    ) -> Result<(), StreamError> {
        tracing::info!(url = %config.url, channel = %config.channel, "Connecting to broker");

        let (ws_stream, _response) = connect_async(&config.url)
            .await
            .map_err(|e| StreamError::ConnectionFailed(e.to_string()))?;

        let (mut write, mut read) = ws_stream.split();

        write
            .send(Message::Text(Self::subscribe_frame(&config.channel)))
            .await
            .map_err(|e| StreamError::SubscribeFailed(e.to_string()))?;

        tracing::info!(channel = %config.channel, "Subscribed to broker channel");

        if tx.send(StreamEvent::Connected).await.is_err() {
            return Ok(());
        }

        let mut ping_interval = tokio::time::interval(config.ping_interval);
        ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                msg = read.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            if tx.send(StreamEvent::Message(text)).await.is_err() {
                                tracing::debug!("Receiver dropped, closing connection");
                                return Ok(());
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            write.send(Message::Pong(data)).await
                                .map_err(|_| StreamError::ConnectionLost)?;
                        }
                        Some(Ok(Message::Pong(_))) => {}
                        Some(Ok(Message::Close(_))) => {
                            tracing::info!("Received close frame from broker");
                            return Err(StreamError::ConnectionLost);
                        }
                        Some(Ok(_)) => {
                            // The price channel only carries text frames
                        }
                        Some(Err(e)) => {
                            return Err(StreamError::ConnectionFailed(e.to_string()));
                        }
                        None => {
                            return Err(StreamError::ConnectionLost);
                        }
                    }
                }

                _ = ping_interval.tick() => {
                    write.send(Message::Ping(vec![])).await
                        .map_err(|_| StreamError::ConnectionLost)?;
                }
            }
        }
    }
}
