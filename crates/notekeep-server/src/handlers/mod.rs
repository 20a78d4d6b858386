//! HTTP handlers: notes CRUD and analytics.

pub mod analytics;
pub mod notes;
