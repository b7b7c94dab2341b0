//! Command/Answer element contract.
//!
//! Commands and answers form an open family: any type in the process can ride
//! a frame once it is registered under its stable wire tag. The trait also
//! carries the two per-type behaviors the transport itself cares about —
//! whether the receiver must serialize execution, and how the element renders
//! for diagnostic logging.

use std::any::Any;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AgentWireError, Result};

/// Log verbosity levels, most verbose first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// True when a logger running at `self` includes material whose minimum
    /// level is `min`. A `Trace`-classified field only appears when the
    /// logger itself runs at `Trace`.
    pub fn allows(self, min: Severity) -> bool {
        min >= self
    }
}

/// A typed payload element (command or answer).
///
/// `wire_name` must be stable across processes and releases: it is the single
/// key of the JSON wrapper object, and the remote peer resolves it against
/// its own registry.
pub trait WireObject: Debug + Send + Sync + Any {
    /// Stable wire tag.
    fn wire_name(&self) -> &'static str;

    /// Field content as a JSON value.
    fn to_value(&self) -> Result<Value>;

    /// Must the receiver serialize execution of this element relative to
    /// other batches for the same agent.
    fn execute_in_sequence(&self) -> bool {
        false
    }

    /// Minimum logger verbosity at which this element appears in diagnostic
    /// output at all.
    fn log_level(&self) -> Severity {
        Severity::Debug
    }

    /// Loggable projection at the given effective level, or `None` to omit
    /// the element entirely. The default includes the whole element when the
    /// type-level floor passes; types with stricter per-field floors override
    /// this and prune the offending fields instead.
    fn log_view(&self, effective: Severity) -> Option<Value> {
        if effective.allows(self.log_level()) {
            self.to_value().ok()
        } else {
            None
        }
    }

    /// Downcast support for callers that need the concrete type back.
    fn as_any(&self) -> &dyn Any;
}

/// Registration contract: a concrete element type with a stable tag that
/// round-trips through serde. Blanket machinery in the registry uses this to
/// build the decode factory.
pub trait WireType: WireObject + Serialize + DeserializeOwned + Sized {
    /// Stable wire tag for the type.
    const WIRE_NAME: &'static str;
}

/// Helper for `WireObject::to_value` implementations.
pub fn to_json_value<T: Serialize>(value: &T, wire_name: &str) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| AgentWireError::Serde(format!("{wire_name}: {e}")))
}

/// Sentinel substituted when a top-level payload fails to parse as JSON.
///
/// Receivers must recognize this type and treat the batch as failed; the
/// substitution keeps one corrupt frame from crashing the pipeline, at the
/// cost of downgrading the parse error into a runtime-visible value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct BadCommand {
    /// The unparsable content, kept verbatim for diagnostics.
    pub content: String,
}

impl WireObject for BadCommand {
    fn wire_name(&self) -> &'static str {
        Self::WIRE_NAME
    }

    fn to_value(&self) -> Result<Value> {
        to_json_value(self, Self::WIRE_NAME)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl WireType for BadCommand {
    const WIRE_NAME: &'static str = "BadCommand";
}
