//! Query facade integration tests

use std::sync::Arc;

use price_relay::price::{CurrentPriceStore, HistoryLog, PriceError, PriceService};
use rust_decimal_macros::dec;

#[test]
fn test_unknown_instrument_is_typed_not_found() {
    let service = PriceService::new(
        Arc::new(CurrentPriceStore::with_default_ttl()),
        Arc::new(HistoryLog::with_default_cap()),
    );

    match service.current_price("ETH") {
        Err(PriceError::NotFound(instrument)) => assert_eq!(instrument, "ETH"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_history_window_selection() {
    let history = Arc::new(HistoryLog::with_default_cap());
    let service = PriceService::new(Arc::new(CurrentPriceStore::with_default_ttl()), history.clone());

    for (ts, price) in [
        (1000, dec!(3000)),
        (2000, dec!(3050)),
        (3000, dec!(3025.5)),
        (4000, dec!(3100)),
    ] {
        history.append("ETH", ts, price);
    }

    let points = service.price_history("ETH", 2000, 3000);
    let timestamps: Vec<i64> = points.iter().map(|p| p.timestamp).collect();
    assert_eq!(timestamps, vec![2000, 3000]);

    // Inverted and out-of-range windows are empty, not errors.
    assert!(service.price_history("ETH", 3000, 2000).is_empty());
    assert!(service.price_history("ETH", 5000, 9000).is_empty());
}

#[test]
fn test_current_price_and_history_are_decoupled() {
    let current = Arc::new(CurrentPriceStore::with_default_ttl());
    let history = Arc::new(HistoryLog::with_default_cap());
    let service = PriceService::new(current.clone(), history.clone());

    // History retains points even when no current price is cached.
    history.append("ETH", 1000, dec!(3000));
    assert!(service.current_price("ETH").is_err());
    assert_eq!(service.price_history("ETH", 0, 2000).len(), 1);
}
