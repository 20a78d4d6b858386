//! Derived statistics over the note store and the request counters.
//!
//! [`AnalyticsReporter`] is stateless: every call issues fresh read-only
//! aggregate queries through [`NoteAggregates`] and reads the collector, so
//! repeated calls without intervening writes agree on the note fields.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{NotekeepError, Result};
use crate::metrics::RequestMetricsCollector;
use crate::scalar::AggregateScalar;

/// Aggregate queries the reporter needs from the note store.
///
/// Implementations must return [`NotekeepError::StoreUnavailable`] when the
/// store is not initialized and [`NotekeepError::BadQuery`] when a query ran
/// and failed.
#[async_trait]
pub trait NoteAggregates: Send + Sync {
    async fn count(&self) -> Result<i64>;
    async fn average_content_length(&self) -> Result<AggregateScalar>;
}

/// Note-derived part of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoteAggregateView {
    pub total_notes: i64,
    pub avg_note_length: f64,
}

/// Response object of the summary endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub total_notes: i64,
    pub avg_note_length: f64,
    pub total_requests: u64,
    pub avg_request_latency_ms: f64,
    pub uptime_sec: u64,
}

#[derive(Clone)]
pub struct AnalyticsReporter {
    store: Arc<dyn NoteAggregates>,
    collector: Arc<RequestMetricsCollector>,
}

impl AnalyticsReporter {
    pub fn new(store: Arc<dyn NoteAggregates>, collector: Arc<RequestMetricsCollector>) -> Self {
        Self { store, collector }
    }

    pub async fn note_count(&self) -> Result<i64> {
        let n = self.store.count().await?;
        Ok(n.max(0))
    }

    /// Mean content length in characters. Best effort: only an unavailable
    /// store is an error, any other failure reads as `0.0`.
    pub async fn average_note_length(&self) -> Result<f64> {
        match self.store.average_content_length().await {
            Ok(raw) => Ok(raw.to_f64()),
            Err(e @ NotekeepError::StoreUnavailable(_)) => Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "average note length query failed; reporting 0");
                Ok(0.0)
            }
        }
    }

    pub async fn notes(&self) -> Result<NoteAggregateView> {
        let total_notes = self.note_count().await?;
        let avg_note_length = self.average_note_length().await?;
        Ok(NoteAggregateView {
            total_notes,
            avg_note_length,
        })
    }

    /// Combine note aggregates, request counters and uptime.
    ///
    /// A failing count aborts the whole summary with the same error kind; no
    /// partial snapshot is returned.
    pub async fn summary(&self) -> Result<AnalyticsSnapshot> {
        let notes = self.notes().await?;
        let requests = self.collector.snapshot();

        Ok(AnalyticsSnapshot {
            total_notes: notes.total_notes,
            avg_note_length: notes.avg_note_length,
            total_requests: requests.total_requests,
            avg_request_latency_ms: requests.avg_latency_ms(),
            uptime_sec: self.collector.uptime().as_secs(),
        })
    }
}
