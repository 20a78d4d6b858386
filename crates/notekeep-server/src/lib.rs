//! notekeep server library entry.
//!
//! Binds the core analytics and note types to HTTP: config loading, the
//! SQLite note store, shared state, middleware, handlers and the router. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod obs;
pub mod ops;
pub mod respond;
pub mod router;
pub mod store;
