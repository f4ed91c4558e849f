//! Price propagation and history
//!
//! The TTL-bound current-price cache and bounded history log fed by the
//! ingestion consumer, plus the query facade used by request handlers.

mod current;
mod error;
mod history;
mod service;
mod types;

pub use current::{CurrentPriceEntry, CurrentPriceStore, DEFAULT_PRICE_TTL_SECS};
pub use error::PriceError;
pub use history::{HistoryLog, DEFAULT_HISTORY_CAP};
pub use service::PriceService;
pub use types::{PricePoint, PriceUpdate};
