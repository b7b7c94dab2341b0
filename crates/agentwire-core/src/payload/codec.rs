//! Polymorphic payload codec.
//!
//! Each element is wrapped as a single-key JSON object keyed by its wire tag:
//! `[a, b]` becomes `[{"TagA": {..}}, {"TagB": {..}}]`, order preserved. The
//! same wrapper applies without the outer array for a single polymorphic
//! value nested inside another structure.
//!
//! Wire-compat asymmetry, kept on purpose: an empty batch serializes to the
//! explicit `null` marker rather than `[]`, and decoding the marker yields an
//! empty (not absent) collection. Older peers emit and expect exactly this.

use std::collections::HashMap;

use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::{AgentWireError, Result};
use crate::payload::object::WireObject;
use crate::payload::registry::WireRegistry;

const EMPTY_MARKER: &str = "null";

type Wrapper<'a> = HashMap<String, &'a RawValue>;

/// Serialize an ordered batch of elements.
pub fn serialize(objects: &[Box<dyn WireObject>]) -> Result<String> {
    if objects.is_empty() {
        return Ok(EMPTY_MARKER.to_string());
    }
    let mut wrapped = Vec::with_capacity(objects.len());
    for object in objects {
        wrapped.push(wrap(object.as_ref())?);
    }
    serde_json::to_string(&wrapped).map_err(|e| AgentWireError::Serde(e.to_string()))
}

/// Serialize a single polymorphic value (no outer array).
pub fn serialize_one(object: &dyn WireObject) -> Result<String> {
    let wrapped = wrap(object)?;
    serde_json::to_string(&wrapped).map_err(|e| AgentWireError::Serde(e.to_string()))
}

/// Deserialize an ordered batch, resolving each wrapper key through
/// `registry`. Top-level parse failure is `MalformedPayload`; an unresolvable
/// key is `UnknownType` and is not swallowed.
pub fn deserialize(content: &str, registry: &WireRegistry) -> Result<Vec<Box<dyn WireObject>>> {
    let trimmed = content.trim();
    if trimmed.is_empty() || trimmed == EMPTY_MARKER {
        return Ok(Vec::new());
    }

    let wrappers: Vec<Wrapper> = serde_json::from_str(trimmed)
        .map_err(|e| AgentWireError::MalformedPayload(e.to_string()))?;

    let mut objects = Vec::with_capacity(wrappers.len());
    for wrapper in &wrappers {
        objects.push(unwrap(wrapper, registry)?);
    }
    Ok(objects)
}

/// Deserialize a single polymorphic value (no outer array).
pub fn deserialize_one(content: &str, registry: &WireRegistry) -> Result<Box<dyn WireObject>> {
    let wrapper: Wrapper = serde_json::from_str(content)
        .map_err(|e| AgentWireError::MalformedPayload(e.to_string()))?;
    unwrap(&wrapper, registry)
}

fn wrap(object: &dyn WireObject) -> Result<Value> {
    let mut map = Map::with_capacity(1);
    map.insert(object.wire_name().to_string(), object.to_value()?);
    Ok(Value::Object(map))
}

fn unwrap(wrapper: &Wrapper<'_>, registry: &WireRegistry) -> Result<Box<dyn WireObject>> {
    let mut entries = wrapper.iter();
    let (name, raw) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(AgentWireError::MalformedPayload(
                "wrapper object must have exactly one key".into(),
            ))
        }
    };
    registry.decode(name, raw)
}
