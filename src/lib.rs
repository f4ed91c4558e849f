//! price-relay: price propagation and history service
//!
//! This library provides the core components for:
//! - Ingesting price updates from the broker's price channel
//! - A TTL-bound current-price cache per instrument
//! - A bounded rolling history log with range queries
//! - The read-only query facade used by request handlers
//! - Structured logging and Prometheus metrics

pub mod cli;
pub mod config;
pub mod consumer;
pub mod price;
pub mod stream;
pub mod telemetry;
