//! Prometheus metrics

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Price updates applied to the stores
    UpdatesApplied,
    /// Malformed payloads discarded at decode
    UpdatesDiscarded,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Instruments with a cached current price
    TrackedInstruments,
}

fn counter_name(metric: CounterMetric) -> &'static str {
    match metric {
        CounterMetric::UpdatesApplied => "pricerelay_updates_applied_total",
        CounterMetric::UpdatesDiscarded => "pricerelay_updates_discarded_total",
    }
}

fn gauge_name(metric: GaugeMetric) -> &'static str {
    match metric {
        GaugeMetric::TrackedInstruments => "pricerelay_tracked_instruments",
    }
}

/// Increment a counter
pub fn increment_counter(metric: CounterMetric) {
    metrics::counter!(counter_name(metric)).increment(1);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    metrics::gauge!(gauge_name(metric)).set(value);
}

/// Install the Prometheus exporter listening on the given port
pub fn install_metrics_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))?;

    tracing::info!(%addr, "Metrics exporter listening");
    Ok(())
}
