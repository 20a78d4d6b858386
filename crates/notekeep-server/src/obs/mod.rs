//! In-process HTTP metrics.
//!
//! The process-wide totals live in `notekeep_core::metrics`; this module adds
//! a per-route breakdown and renders both in Prometheus text format for the
//! `/metrics` handler.

pub mod metrics;
