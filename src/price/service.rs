//! Read-only query facade over the price stores

use std::sync::Arc;

use rust_decimal::Decimal;

use super::{CurrentPriceStore, HistoryLog, PriceError, PricePoint};

/// The query surface consumed by request handlers
///
/// Pure delegation to the two stores: no extra caching, no transformation.
#[derive(Clone)]
pub struct PriceService {
    current: Arc<CurrentPriceStore>,
    history: Arc<HistoryLog>,
}

impl PriceService {
    /// Create a facade over the given stores
    pub fn new(current: Arc<CurrentPriceStore>, history: Arc<HistoryLog>) -> Self {
        Self { current, history }
    }

    /// Latest price for `instrument`
    ///
    /// Fails with [`PriceError::NotFound`] when no update was ever applied
    /// or the cached entry has expired.
    pub fn current_price(&self, instrument: &str) -> Result<Decimal, PriceError> {
        self.current.get(instrument).map(|entry| entry.price)
    }

    /// Retained history points within `[start, end]`, ascending by timestamp
    ///
    /// Empty on no matches or an unknown instrument; never an error.
    pub fn price_history(&self, instrument: &str, start: i64, end: i64) -> Vec<PricePoint> {
        self.history.range(instrument, start, end)
    }
}
