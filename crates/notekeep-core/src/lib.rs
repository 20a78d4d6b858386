//! notekeep core: note records, request metrics, and analytics reporting.
//!
//! This crate holds everything that does not depend on HTTP or a concrete
//! database driver: the shared error surface, the request metrics collector,
//! the aggregate query seam over the note store, and the analytics reporter
//! that combines the two. The server crate binds it to axum and SQLite.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `NotekeepError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod analytics;
pub mod error;
pub mod metrics;
pub mod note;
pub mod scalar;

/// Shared result type.
pub use error::{Result, NotekeepError};
