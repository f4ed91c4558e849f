//! Broker stream types and configuration

use std::time::Duration;

use thiserror::Error;

/// Broker stream configuration
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Broker WebSocket URL
    pub url: String,
    /// Channel carrying price updates
    pub channel: String,
    /// Interval for ping frames keeping the connection alive
    pub ping_interval: Duration,
}

impl StreamConfig {
    /// Create a config for the given broker URL and channel
    pub fn new(url: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            channel: channel.into(),
            ping_interval: Duration::from_secs(30),
        }
    }

    /// Set the ping interval
    pub fn ping_interval(mut self, d: Duration) -> Self {
        self.ping_interval = d;
        self
    }
}

/// Events delivered by the stream client
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// Raw payload from the subscribed channel
    Message(String),
    /// Subscription established
    Connected,
    /// Connection closed or lost; the stream ends after this event
    Disconnected,
}

/// Broker stream errors
#[derive(Debug, Clone, Error)]
pub enum StreamError {
    /// Could not establish the connection
    #[error("broker connection failed: {0}")]
    ConnectionFailed(String),
    /// An established connection ended
    #[error("broker connection lost")]
    ConnectionLost,
    /// The subscribe frame could not be delivered
    #[error("subscribe to channel failed: {0}")]
    SubscribeFailed(String),
}
