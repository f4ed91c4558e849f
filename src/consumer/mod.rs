//! Ingestion consumer
//!
//! Long-lived background task bridging the broker stream to the price
//! stores. Malformed payloads are logged and dropped; a lost broker
//! connection is fatal to the task and leaves restart to the supervisor.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::price::{CurrentPriceStore, HistoryLog, PriceUpdate};
use crate::stream::{StreamError, StreamEvent};
use crate::telemetry::{self, CounterMetric, GaugeMetric};

/// Applies inbound price updates to the current-price store and history log
///
/// Multiple consumers may run concurrently against the same stores; writes
/// from different instances interleave by arrival order.
pub struct Consumer {
    current: Arc<CurrentPriceStore>,
    history: Arc<HistoryLog>,
}

impl Consumer {
    /// Create a consumer writing to the given stores
    pub fn new(current: Arc<CurrentPriceStore>, history: Arc<HistoryLog>) -> Self {
        Self { current, history }
    }

    /// Consume stream events until shutdown or connection loss
    ///
    /// A shutdown signal stops intake after the in-flight message has been
    /// applied; dropping the event receiver on return releases the broker
    /// subscription. A `Disconnected` event (or a closed stream) returns
    /// [`StreamError::ConnectionLost`].
    pub async fn run(
        self,
        mut events: mpsc::Receiver<StreamEvent>,
        mut shutdown: oneshot::Receiver<()>,
    ) -> Result<(), StreamError> {
        loop {
            tokio::select! {
                // Check shutdown before accepting another message.
                biased;

                _ = &mut shutdown => {
                    tracing::info!("Consumer shutting down");
                    return Ok(());
                }
                event = events.recv() => {
                    match event {
                        Some(StreamEvent::Message(payload)) => self.apply(&payload),
                        Some(StreamEvent::Connected) => {
                            tracing::info!("Price update stream connected");
                        }
                        Some(StreamEvent::Disconnected) | None => {
                            tracing::error!("Price update stream ended");
                            return Err(StreamError::ConnectionLost);
                        }
                    }
                }
            }
        }
    }

    /// Decode one payload and apply it to both stores
    ///
    /// Decode failures are dropped without touching either store.
    fn apply(&self, payload: &str) {
        let update: PriceUpdate = match serde_json::from_str(payload) {
            Ok(update) => update,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed price update");
                telemetry::increment_counter(CounterMetric::UpdatesDiscarded);
                return;
            }
        };

        self.current
            .set_price(&update.instrument, update.price, update.timestamp);
        self.history
            .append(&update.instrument, update.timestamp, update.price);

        telemetry::increment_counter(CounterMetric::UpdatesApplied);
        telemetry::set_gauge(
            GaugeMetric::TrackedInstruments,
            self.current.instrument_count() as f64,
        );

        tracing::debug!(
            instrument = %update.instrument,
            price = %update.price,
            timestamp = update.timestamp,
            "Applied price update"
        );
    }
}
