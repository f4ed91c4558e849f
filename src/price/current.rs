//! Current-price cache with fixed TTL

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;

use super::PriceError;

/// Default time-to-live for current-price entries (24 hours)
pub const DEFAULT_PRICE_TTL_SECS: i64 = 24 * 60 * 60;

/// Latest known price for one instrument
#[derive(Debug, Clone, Copy)]
pub struct CurrentPriceEntry {
    /// Last applied price
    pub price: Decimal,
    /// Event timestamp of the applied update (epoch seconds)
    pub observed_at: i64,
    /// The entry reads as absent once this instant has passed
    pub expires_at: DateTime<Utc>,
}

/// TTL-bound cache of the latest price per instrument
///
/// Writes are last-write-wins by arrival order; event timestamps are not
/// compared, so a late-arriving older update overwrites a newer one.
/// Expiry is checked at read time only.
pub struct CurrentPriceStore {
    entries: DashMap<String, CurrentPriceEntry>,
    ttl: Duration,
}

impl CurrentPriceStore {
    /// Create a store with the given entry TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Create a store with the default 24h TTL
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::seconds(DEFAULT_PRICE_TTL_SECS))
    }

    /// Unconditionally overwrite the entry for `instrument`, refreshing its expiry
    pub fn set_price(&self, instrument: &str, price: Decimal, observed_at: i64) {
        self.set_price_at(instrument, price, observed_at, Utc::now());
    }

    /// [`set_price`](Self::set_price) against an explicit clock
    pub fn set_price_at(
        &self,
        instrument: &str,
        price: Decimal,
        observed_at: i64,
        now: DateTime<Utc>,
    ) {
        let entry = CurrentPriceEntry {
            price,
            observed_at,
            expires_at: now + self.ttl,
        };
        self.entries.insert(instrument.to_string(), entry);
    }

    /// Latest entry for `instrument`
    ///
    /// Fails with [`PriceError::NotFound`] when no entry exists or its TTL
    /// has elapsed.
    pub fn get(&self, instrument: &str) -> Result<CurrentPriceEntry, PriceError> {
        self.get_at(instrument, Utc::now())
    }

    /// [`get`](Self::get) against an explicit clock
    pub fn get_at(
        &self,
        instrument: &str,
        now: DateTime<Utc>,
    ) -> Result<CurrentPriceEntry, PriceError> {
        match self.entries.get(instrument) {
            Some(entry) if entry.expires_at > now => Ok(*entry),
            _ => Err(PriceError::NotFound(instrument.to_string())),
        }
    }

    /// Number of instruments with an entry, expired or not
    pub fn instrument_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for CurrentPriceStore {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}
