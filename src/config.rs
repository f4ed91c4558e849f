//! Configuration types for price-relay

use serde::Deserialize;

use crate::price::{DEFAULT_HISTORY_CAP, DEFAULT_PRICE_TTL_SECS};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub broker: BrokerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    pub telemetry: TelemetryConfig,
}

/// Message broker connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerConfig {
    /// Broker WebSocket URL
    pub url: String,

    /// Channel carrying price updates
    #[serde(default = "default_channel")]
    pub channel: String,
}

/// Store tuning
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Current-price TTL in seconds
    #[serde(default = "default_price_ttl_secs")]
    pub price_ttl_secs: i64,

    /// Retained history points per instrument
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,
}

fn default_channel() -> String {
    "price_updates".to_string()
}
fn default_price_ttl_secs() -> i64 {
    DEFAULT_PRICE_TTL_SECS
}
fn default_history_cap() -> usize {
    DEFAULT_HISTORY_CAP
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            price_ttl_secs: DEFAULT_PRICE_TTL_SECS,
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub metrics_port: u16,
    pub log_level: String,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [broker]
            url = "wss://broker.internal:9443/stream"
            channel = "price_updates"

            [store]
            price_ttl_secs = 3600
            history_cap = 500

            [telemetry]
            metrics_port = 9090
            log_level = "info"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.broker.url, "wss://broker.internal:9443/stream");
        assert_eq!(config.store.price_ttl_secs, 3600);
        assert_eq!(config.store.history_cap, 500);
        assert_eq!(config.telemetry.metrics_port, 9090);
    }

    #[test]
    fn test_config_defaults() {
        let toml = r#"
            [broker]
            url = "wss://broker.internal:9443/stream"

            [telemetry]
            metrics_port = 9090
            log_level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.broker.channel, "price_updates");
        assert_eq!(config.store.price_ttl_secs, 24 * 60 * 60);
        assert_eq!(config.store.history_cap, 1000);
    }

    #[test]
    fn test_config_missing_broker_fails() {
        let toml = r#"
            [telemetry]
            metrics_port = 9090
            log_level = "info"
        "#;

        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_clone() {
        let config = BrokerConfig {
            url: "wss://broker.internal:9443/stream".to_string(),
            channel: "price_updates".to_string(),
        };
        let cloned = config.clone();
        assert_eq!(config.url, cloned.url);
    }
}
