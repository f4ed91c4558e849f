//! End-to-end ingestion tests: broker events in, query facade out

use std::sync::Arc;
use std::time::Duration;

use price_relay::consumer::Consumer;
use price_relay::price::{CurrentPriceStore, HistoryLog, PriceService};
use price_relay::stream::StreamEvent;
use rust_decimal_macros::dec;
use tokio::sync::{mpsc, oneshot};

fn setup() -> (Arc<CurrentPriceStore>, Arc<HistoryLog>, PriceService) {
    let current = Arc::new(CurrentPriceStore::with_default_ttl());
    let history = Arc::new(HistoryLog::with_default_cap());
    let service = PriceService::new(current.clone(), history.clone());
    (current, history, service)
}

async fn wait_for_price(service: &PriceService, instrument: &str, price: rust_decimal::Decimal) {
    for _ in 0..200 {
        if service.current_price(instrument).ok() == Some(price) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("price for {} never reached {}", instrument, price);
}

#[tokio::test]
async fn test_ingest_then_query() {
    let (current, history, service) = setup();

    let (tx, rx) = mpsc::channel(16);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let consumer = Consumer::new(current, history);
    let handle = tokio::spawn(consumer.run(rx, shutdown_rx));

    tx.send(StreamEvent::Connected).await.unwrap();
    for payload in [
        r#"{"token": "ETH", "price": 3000.0, "timestamp": 1000}"#,
        r#"{"token": "ETH", "price": 3050.0, "timestamp": 2000}"#,
    ] {
        tx.send(StreamEvent::Message(payload.to_string()))
            .await
            .unwrap();
    }

    wait_for_price(&service, "ETH", dec!(3050)).await;

    shutdown_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();

    assert_eq!(service.current_price("ETH").unwrap(), dec!(3050));

    let points = service.price_history("ETH", 0, 3000);
    assert_eq!(points.len(), 2);
    assert_eq!((points[0].timestamp, points[0].price), (1000, dec!(3000)));
    assert_eq!((points[1].timestamp, points[1].price), (2000, dec!(3050)));
}

#[tokio::test]
async fn test_malformed_payload_does_not_stall_the_stream() {
    let (current, history, service) = setup();

    let (tx, rx) = mpsc::channel(16);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let consumer = Consumer::new(current, history);
    let handle = tokio::spawn(consumer.run(rx, shutdown_rx));

    for payload in [
        r#"{"token": "ETH"}"#,
        "not valid json",
        r#"{"token": "ETH", "price": 3000.0, "timestamp": 1000}"#,
    ] {
        tx.send(StreamEvent::Message(payload.to_string()))
            .await
            .unwrap();
    }

    wait_for_price(&service, "ETH", dec!(3000)).await;

    shutdown_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();

    // Only the well-formed message reached the stores.
    assert_eq!(service.price_history("ETH", 0, i64::MAX).len(), 1);
}

#[tokio::test]
async fn test_two_consumer_instances_share_the_stores() {
    let (current, history, service) = setup();

    let (tx_a, rx_a) = mpsc::channel(64);
    let (tx_b, rx_b) = mpsc::channel(64);
    let (shutdown_tx_a, shutdown_rx_a) = oneshot::channel();
    let (shutdown_tx_b, shutdown_rx_b) = oneshot::channel();

    let handle_a =
        tokio::spawn(Consumer::new(current.clone(), history.clone()).run(rx_a, shutdown_rx_a));
    let handle_b =
        tokio::spawn(Consumer::new(current.clone(), history.clone()).run(rx_b, shutdown_rx_b));

    for i in 0..20i64 {
        let even = format!(r#"{{"token": "ETH", "price": 3000.5, "timestamp": {}}}"#, 2 * i);
        let odd = format!(
            r#"{{"token": "ETH", "price": 3001.5, "timestamp": {}}}"#,
            2 * i + 1
        );
        tx_a.send(StreamEvent::Message(even)).await.unwrap();
        tx_b.send(StreamEvent::Message(odd)).await.unwrap();
    }

    for _ in 0..200 {
        if history.point_count("ETH") == 40 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    shutdown_tx_a.send(()).unwrap();
    shutdown_tx_b.send(()).unwrap();
    handle_a.await.unwrap().unwrap();
    handle_b.await.unwrap().unwrap();

    let points = service.price_history("ETH", 0, i64::MAX);
    assert_eq!(points.len(), 40);
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.timestamp, i as i64);
    }
}
