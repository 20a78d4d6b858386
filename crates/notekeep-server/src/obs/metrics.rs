use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use notekeep_core::metrics::RequestMetricsCollector;

/// Label key: (method, route, status).
type RouteKey = (String, String, u16);

/// Request counts per method, matched route and status code.
#[derive(Default)]
pub struct RouteCounters {
    map: DashMap<RouteKey, AtomicU64>,
}

impl RouteCounters {
    pub fn inc(&self, method: &str, route: &str, status: u16) {
        let key = (method.to_string(), route.to_string(), status);
        self.map
            .entry(key)
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self, method: &str, route: &str, status: u16) -> u64 {
        let key = (method.to_string(), route.to_string(), status);
        self.map
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let mut rows: Vec<(RouteKey, u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort();

        let _ = writeln!(out, "# TYPE {name} counter");
        for ((method, route, status), val) in rows {
            let _ = writeln!(
                out,
                "{name}{{method=\"{}\",route=\"{}\",status=\"{status}\"}} {val}",
                escape_label(&method),
                escape_label(&route),
            );
        }
    }
}

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Render process totals plus the per-route breakdown.
pub fn render(collector: &RequestMetricsCollector, routes: &RouteCounters) -> String {
    let snap = collector.snapshot();
    let mut out = String::new();

    let _ = writeln!(out, "# TYPE notekeep_http_requests_total counter");
    let _ = writeln!(out, "notekeep_http_requests_total {}", snap.total_requests);
    let _ = writeln!(out, "# TYPE notekeep_http_request_latency_nanos_total counter");
    let _ = writeln!(
        out,
        "notekeep_http_request_latency_nanos_total {}",
        snap.total_latency_nanos
    );
    let _ = writeln!(out, "# TYPE notekeep_uptime_seconds gauge");
    let _ = writeln!(out, "notekeep_uptime_seconds {}", collector.uptime().as_secs());

    routes.render("notekeep_http_route_requests_total", &mut out);
    out
}
