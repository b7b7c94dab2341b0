//! Top-level facade crate for agentwire.
//!
//! Re-exports the core wire-protocol crate so users can depend on a single crate.

pub mod core {
    pub use agentwire_core::*;
}
