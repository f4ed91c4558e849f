//! Price service errors

use thiserror::Error;

/// Query-path errors surfaced to request handlers
#[derive(Debug, Error)]
pub enum PriceError {
    /// No current price cached, or the cached entry's TTL has elapsed
    #[error("no current price for instrument {0}")]
    NotFound(String),
}
