//! Request counter accounting under concurrency.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use notekeep_core::metrics::{RequestMetricsCollector, RequestSnapshot};

#[test]
fn concurrent_wrapped_calls_are_all_counted() {
    let collector = Arc::new(RequestMetricsCollector::new());
    let handler = Arc::new(collector.wrap(|x: u64| x * 2));

    let threads = 8;
    let per_thread = 500;
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let handler = Arc::clone(&handler);
            thread::spawn(move || {
                for i in 0..per_thread {
                    assert_eq!(handler(i), i * 2);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(collector.snapshot().total_requests, threads * per_thread);
}

#[test]
fn latency_covers_handler_duration() {
    let collector = Arc::new(RequestMetricsCollector::new());
    let sleepy = collector.wrap(|ms: u64| thread::sleep(Duration::from_millis(ms)));

    sleepy(5);
    sleepy(10);

    let snap = collector.snapshot();
    assert_eq!(snap.total_requests, 2);
    assert!(snap.total_latency_nanos >= 15_000_000, "got {}", snap.total_latency_nanos);
    assert!(snap.avg_latency_ms() >= 7.5);
}

#[test]
fn wrap_preserves_handler_result() {
    let collector = Arc::new(RequestMetricsCollector::new());
    let parse = collector.wrap(|s: String| s.parse::<u32>());

    assert!(parse("nope".to_string()).is_err());
    assert_eq!(parse("42".to_string()).unwrap(), 42);
    assert_eq!(collector.snapshot().total_requests, 2);
}

#[test]
fn average_latency_is_zero_without_requests() {
    let collector = RequestMetricsCollector::new();
    let snap = collector.snapshot();
    assert_eq!(snap, RequestSnapshot::default());
    assert_eq!(snap.avg_latency_ms(), 0.0);
}

#[test]
fn average_latency_in_milliseconds() {
    let collector = RequestMetricsCollector::new();
    collector.record_request(Duration::from_millis(2));
    collector.record_request(Duration::from_millis(4));

    let snap = collector.snapshot();
    assert_eq!(snap.total_latency_nanos, 6_000_000);
    assert_eq!(snap.avg_latency_ms(), 3.0);
}

#[tokio::test]
async fn time_records_async_work() {
    let collector = RequestMetricsCollector::new();
    let out = collector
        .time(async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            "done"
        })
        .await;

    assert_eq!(out, "done");
    let snap = collector.snapshot();
    assert_eq!(snap.total_requests, 1);
    assert!(snap.total_latency_nanos >= 5_000_000);
}
