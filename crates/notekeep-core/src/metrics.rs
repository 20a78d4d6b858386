//! Process-wide request counters.
//!
//! One [`RequestMetricsCollector`] is built at startup and shared by handle
//! with every call site that wraps a handler. Both counters are plain atomics
//! updated with relaxed ordering: increments are never lost, but a
//! [`RequestSnapshot`] reads each counter independently, so the pair may be a
//! request apart under concurrent load.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct RequestMetricsCollector {
    total_requests: AtomicU64,
    total_latency_nanos: AtomicU64,
    started_at: Instant,
}

impl Default for RequestMetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestMetricsCollector {
    /// Start a collector. Uptime is measured from this call.
    pub fn new() -> Self {
        Self {
            total_requests: AtomicU64::new(0),
            total_latency_nanos: AtomicU64::new(0),
            started_at: Instant::now(),
        }
    }

    /// Account one completed request.
    pub fn record_request(&self, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.total_latency_nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RequestSnapshot {
        RequestSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            total_latency_nanos: self.total_latency_nanos.load(Ordering::Relaxed),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Decorate a synchronous handler so every call is timed and counted.
    ///
    /// The returned closure behaves exactly like `handler`; the counters are
    /// updated after it returns.
    pub fn wrap<Req, Resp, H>(self: &Arc<Self>, handler: H) -> impl Fn(Req) -> Resp + Send + Sync
    where
        H: Fn(Req) -> Resp + Send + Sync,
    {
        let collector = Arc::clone(self);
        move |req| {
            let start = Instant::now();
            let resp = handler(req);
            collector.record_request(start.elapsed());
            resp
        }
    }

    /// Async counterpart of [`wrap`](Self::wrap): drive `fut` to completion
    /// and record its wall time.
    pub async fn time<F: Future>(&self, fut: F) -> F::Output {
        let start = Instant::now();
        let out = fut.await;
        self.record_request(start.elapsed());
        out
    }
}

/// Point-in-time read of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSnapshot {
    pub total_requests: u64,
    pub total_latency_nanos: u64,
}

impl RequestSnapshot {
    /// Mean request latency in milliseconds; `0.0` before the first request.
    pub fn avg_latency_ms(&self) -> f64 {
        if self.total_requests == 0 {
            return 0.0;
        }
        self.total_latency_nanos as f64 / self.total_requests as f64 / 1e6
    }
}
