//! Payload layer: the typed objects carried inside frames.
//!
//! - `object`: the Command/Answer element contract and log severity model.
//! - `registry`: string-keyed decode factories, populated at process start.
//! - `codec`: the polymorphic single-key-wrapper JSON format.
//! - `redact`: the log-only serialization path (never hits the wire).

pub mod codec;
pub mod object;
pub mod redact;
pub mod registry;

pub use object::{BadCommand, Severity, WireObject, WireType};
pub use registry::WireRegistry;
