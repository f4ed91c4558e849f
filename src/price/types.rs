//! Price domain types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price update delivered on the broker's price channel
///
/// Wire payload: `{"token": "ETH", "price": 3050.25, "timestamp": 1700000000}`.
/// Unknown fields are ignored; a missing required field fails the decode.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceUpdate {
    /// Instrument identifier (e.g., "ETH")
    #[serde(rename = "token")]
    pub instrument: String,
    /// Observed price
    pub price: Decimal,
    /// Event timestamp (epoch seconds)
    pub timestamp: i64,
}

/// A retained history point for one instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricePoint {
    /// Event timestamp (epoch seconds)
    pub timestamp: i64,
    /// Price at that timestamp
    pub price: Decimal,
}
