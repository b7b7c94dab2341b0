//! agentwire core: the control-plane <-> agent wire protocol.
//!
//! This crate defines the framed byte format exchanged between a management
//! server and its remote agents: the fixed binary header, the gzip rule for
//! large payloads, the polymorphic JSON payload codec, and the request/response
//! envelopes orchestration code actually builds and parses. It intentionally
//! carries no transport or runtime dependencies so the connection layer that
//! owns the sockets can be swapped freely.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `AgentWireError`/`Result` so a hostile
//! or corrupt frame can never take down the process parsing it.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod envelope;
pub mod error;
pub mod payload;
pub mod protocol;

/// Shared result type.
pub use error::{AgentWireError, Result};
