//! String-keyed decode factories.
//!
//! The wire tag stays a plain string for compatibility, but resolution is a
//! map lookup against factories registered at process start: an unknown tag
//! is a defined error (`UnknownType`), never swallowed. By convention a
//! process holds two instances, one for commands and one for answers; the
//! registry itself is direction-agnostic.

use dashmap::DashMap;
use serde_json::value::RawValue;

use crate::error::{AgentWireError, Result};
use crate::payload::object::{BadCommand, WireObject, WireType};

type DecodeFn = fn(&RawValue) -> Result<Box<dyn WireObject>>;

/// Registry and decode dispatcher for one direction of the wire.
pub struct WireRegistry {
    factories: DashMap<&'static str, DecodeFn>,
}

impl WireRegistry {
    /// Empty registry apart from the always-resolvable sentinel.
    pub fn new() -> Self {
        let registry = Self {
            factories: DashMap::new(),
        };
        registry.register::<BadCommand>();
        registry
    }

    /// Register a concrete element type under its wire tag.
    pub fn register<T: WireType>(&self) {
        self.factories.insert(T::WIRE_NAME, decode_into::<T>);
    }

    /// True when `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered wire tags, for startup diagnostics.
    pub fn registered(&self) -> Vec<&'static str> {
        self.factories.iter().map(|e| *e.key()).collect()
    }

    /// Resolve `name` and decode `raw` against the resolved type.
    pub fn decode(&self, name: &str, raw: &RawValue) -> Result<Box<dyn WireObject>> {
        let factory: DecodeFn = match self.factories.get(name) {
            Some(entry) => *entry.value(),
            None => return Err(AgentWireError::UnknownType(name.to_string())),
        };
        factory(raw)
    }
}

impl Default for WireRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_into<T: WireType>(raw: &RawValue) -> Result<Box<dyn WireObject>> {
    let value: T = serde_json::from_str(raw.get())
        .map_err(|e| AgentWireError::Serde(format!("{}: {e}", T::WIRE_NAME)))?;
    Ok(Box::new(value))
}
