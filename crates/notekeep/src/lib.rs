//! Top-level facade crate for notekeep.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use notekeep_core::*;
}

pub mod server {
    pub use notekeep_server::*;
}
