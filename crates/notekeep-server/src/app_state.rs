//! Shared application state.
//!
//! Built once at startup; every handler and middleware gets a cheap clone.
//! The request collector is injected here rather than living in a global so
//! tests can build isolated instances.

use std::sync::Arc;

use notekeep_core::analytics::AnalyticsReporter;
use notekeep_core::metrics::RequestMetricsCollector;

use crate::config::ServiceConfig;
use crate::obs::metrics::RouteCounters;
use crate::store::SqliteNotes;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    notes: Arc<SqliteNotes>,
    collector: Arc<RequestMetricsCollector>,
    routes: RouteCounters,
    reporter: AnalyticsReporter,
}

impl AppState {
    pub fn new(cfg: ServiceConfig, notes: SqliteNotes) -> Self {
        let notes = Arc::new(notes);
        let collector = Arc::new(RequestMetricsCollector::new());
        let reporter = AnalyticsReporter::new(notes.clone(), Arc::clone(&collector));

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                notes,
                collector,
                routes: RouteCounters::default(),
                reporter,
            }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn notes(&self) -> &SqliteNotes {
        &self.inner.notes
    }

    pub fn collector(&self) -> &RequestMetricsCollector {
        &self.inner.collector
    }

    pub fn routes(&self) -> &RouteCounters {
        &self.inner.routes
    }

    pub fn reporter(&self) -> &AnalyticsReporter {
        &self.inner.reporter
    }
}
