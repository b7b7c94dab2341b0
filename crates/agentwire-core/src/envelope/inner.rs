//! State shared by Request and Response.
//!
//! Holds the addressing/flag fields plus the payload in whichever form is
//! currently populated: the raw JSON string (inbound, or after emission) or
//! the typed object batch (outbound). At least one is always present;
//! accessing the other converts lazily and memoizes the result.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{AgentWireError, Result};
use crate::payload::object::{BadCommand, Severity, WireObject};
use crate::payload::registry::WireRegistry;
use crate::payload::{codec, redact};
use crate::protocol::frame::FrameHeader;
use crate::protocol::{compress, Flags, Version};

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) version: Version,
    pub(crate) flags: Flags,
    pub(crate) sequence: u64,
    pub(crate) mgmt_id: u64,
    pub(crate) agent_id: u64,
    pub(crate) via_agent_id: u64,
    /// Human-readable agent name, log output only.
    pub(crate) agent_name: Option<String>,
    raw: Option<String>,
    objects: Option<Vec<Box<dyn WireObject>>>,
}

impl Inner {
    pub(crate) fn outbound(
        agent_id: u64,
        via_agent_id: u64,
        mgmt_id: u64,
        flags: Flags,
        objects: Vec<Box<dyn WireObject>>,
    ) -> Inner {
        Inner {
            version: Version::CURRENT,
            flags,
            sequence: 0,
            mgmt_id,
            agent_id,
            via_agent_id,
            agent_name: None,
            raw: None,
            objects: Some(objects),
        }
    }

    pub(crate) fn from_frame(header: FrameHeader, raw: String) -> Inner {
        Inner {
            version: header.version,
            flags: header.flags,
            sequence: header.sequence,
            mgmt_id: header.mgmt_id,
            agent_id: header.agent_id,
            via_agent_id: header.via_agent_id,
            agent_name: None,
            raw: Some(raw),
            objects: None,
        }
    }

    /// Typed batch, deserializing on first call. A payload that is not valid
    /// JSON becomes a one-element [`BadCommand`] batch instead of an error;
    /// an unresolvable wire tag still propagates.
    pub(crate) fn objects(&mut self, registry: &WireRegistry) -> Result<&[Box<dyn WireObject>]> {
        if self.objects.is_none() {
            let decoded = match self.raw.as_deref() {
                None => Vec::new(),
                Some(raw) => match codec::deserialize(raw, registry) {
                    Ok(objects) => objects,
                    Err(AgentWireError::MalformedPayload(err)) => {
                        tracing::warn!(
                            sequence = self.sequence,
                            agent = self.agent_id,
                            %err,
                            "payload failed to parse, substituting bad-command sentinel"
                        );
                        vec![Box::new(BadCommand {
                            content: raw.to_string(),
                        }) as Box<dyn WireObject>]
                    }
                    Err(other) => return Err(other),
                },
            };
            self.objects = Some(decoded);
        }
        match self.objects.as_deref() {
            Some(objects) => Ok(objects),
            None => Err(AgentWireError::MalformedPayload("payload state lost".into())),
        }
    }

    /// Raw JSON content, serializing the typed batch on first call.
    pub(crate) fn raw_content(&mut self) -> Result<&str> {
        if self.raw.is_none() {
            let serialized = codec::serialize(self.objects.as_deref().unwrap_or(&[]))?;
            self.raw = Some(serialized);
        }
        match self.raw.as_deref() {
            Some(raw) => Ok(raw),
            None => Err(AgentWireError::MalformedPayload("payload state lost".into())),
        }
    }

    /// Emit as a `[header, payload]` scatter pair so callers can writev both
    /// parts without concatenating. Stamps COMPRESSED once the payload size
    /// is known.
    pub(crate) fn to_bytes(&mut self) -> Result<[Bytes; 2]> {
        let content = {
            let raw = self.raw_content()?;
            Bytes::copy_from_slice(raw.as_bytes())
        };
        let uncompressed_len = recorded_len(content.len())?;

        let (payload, compressed) = compress::maybe_compress(content);
        self.flags.set(Flags::COMPRESSED, compressed);

        let header = FrameHeader {
            version: self.version,
            flags: self.flags,
            sequence: self.sequence,
            uncompressed_len,
            mgmt_id: self.mgmt_id,
            agent_id: self.agent_id,
            via_agent_id: self.via_agent_id,
        }
        .encode();

        Ok([header, payload])
    }

    /// One contiguous buffer, for callers that cannot use the scatter pair.
    pub(crate) fn get_bytes(&mut self) -> Result<Bytes> {
        let [header, payload] = self.to_bytes()?;
        let mut buf = BytesMut::with_capacity(header.len() + payload.len());
        buf.put_slice(&header);
        buf.put_slice(&payload);
        Ok(buf.freeze())
    }

    /// Redacted one-line rendering for diagnostics. Uses the typed batch when
    /// it has been materialized, otherwise scrubs the raw string; both paths
    /// end in the password scrubber.
    pub(crate) fn log_line(&self, effective: Severity) -> String {
        let body = match &self.objects {
            Some(objects) => redact::render_for_log(objects, effective),
            None => redact::scrub_passwords(self.raw.as_deref().unwrap_or("")),
        };
        match &self.agent_name {
            Some(name) => format!("seq {} agent {name}: {body}", self.sequence),
            None => format!("seq {} agent {}: {body}", self.sequence, self.agent_id),
        }
    }

    pub(crate) fn any_in_sequence(objects: &[Box<dyn WireObject>]) -> bool {
        objects.iter().any(|object| object.execute_in_sequence())
    }
}

/// The header records the uncompressed length as a u32; a payload that does
/// not fit cannot be framed at all.
fn recorded_len(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| AgentWireError::BadFrame(format!("payload too large to frame: {len} bytes")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::recorded_len;

    #[test]
    fn recorded_len_fits_u32() {
        assert_eq!(recorded_len(0).unwrap(), 0);
        assert_eq!(recorded_len(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn recorded_len_rejects_oversized_payload() {
        let err = recorded_len(u32::MAX as usize + 1).unwrap_err();
        assert_eq!(err.code(), "BAD_FRAME");
    }
}
