//! Bounded per-instrument price history

use dashmap::DashMap;
use rust_decimal::Decimal;

use super::PricePoint;

/// Default number of retained points per instrument
pub const DEFAULT_HISTORY_CAP: usize = 1000;

/// Bounded, timestamp-ordered log of recent price points per instrument
///
/// Each instrument's log is kept sorted by timestamp, with ties preserving
/// insertion order. Once a log exceeds the cap, the oldest points are
/// evicted. Append and query are atomic per instrument (per-key map entry).
pub struct HistoryLog {
    logs: DashMap<String, Vec<PricePoint>>,
    cap: usize,
}

impl HistoryLog {
    /// Create a history log retaining up to `cap` points per instrument
    pub fn new(cap: usize) -> Self {
        Self {
            logs: DashMap::new(),
            cap,
        }
    }

    /// Create a history log with the default 1000-point cap
    pub fn with_default_cap() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }

    /// Insert a point in timestamp order, then evict the oldest points
    /// until the instrument's log is back within the cap
    pub fn append(&self, instrument: &str, timestamp: i64, price: Decimal) {
        let mut log = self.logs.entry(instrument.to_string()).or_default();
        let idx = log.partition_point(|p| p.timestamp <= timestamp);
        log.insert(idx, PricePoint { timestamp, price });
        if log.len() > self.cap {
            let excess = log.len() - self.cap;
            log.drain(..excess);
        }
    }

    /// All retained points with `start <= timestamp <= end`, ascending
    ///
    /// Empty for an unknown instrument, an empty window, or an inverted
    /// range (`start > end`). Never an error.
    pub fn range(&self, instrument: &str, start: i64, end: i64) -> Vec<PricePoint> {
        if start > end {
            return Vec::new();
        }
        let Some(log) = self.logs.get(instrument) else {
            return Vec::new();
        };
        let lo = log.partition_point(|p| p.timestamp < start);
        let hi = log.partition_point(|p| p.timestamp <= end);
        log[lo..hi].to_vec()
    }

    /// Number of retained points for `instrument`
    pub fn point_count(&self, instrument: &str) -> usize {
        self.logs.get(instrument).map_or(0, |log| log.len())
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_default_cap()
    }
}
