//! Wire-level protocol: versioning, flags, frame header, compression.
//!
//! This module owns the byte layout of a frame:
//! - `version`/`flags`: the one-byte version gate and the 16-bit flag set.
//! - `frame`: the fixed big-endian header plus opaque payload bytes.
//! - `peek`: raw-offset accessors for routing before a full decode.
//! - `compress`: the gzip threshold rule for large payloads.
//!
//! All parsers are panic-free: malformed input is reported as
//! `AgentWireError` instead of panicking or indexing raw buffers, so a single
//! corrupt frame never takes down the process.

pub mod compress;
pub mod flags;
pub mod frame;
pub mod peek;
pub mod version;

pub use flags::Flags;
pub use frame::{Frame, FrameHeader};
pub use version::Version;
