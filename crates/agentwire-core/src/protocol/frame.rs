//! Frame header encode/decode (panic-free).
//!
//! Wire layout, all integers big-endian:
//! ```text
//! offset  size  field
//! 0       1     version ordinal
//! 1       1     reserved
//! 2       2     flags
//! 4       8     sequence
//! 12      4     uncompressed payload length
//! 16      8     managementServerId
//! 24      8     agentId
//! 32      8     viaAgentId   (v1 only; implied = agentId for v3+)
//! 40      N     payload
//! ```
//!
//! The header never carries the on-wire payload length, only the uncompressed
//! length: the decoder uses it to size the inflate buffer and otherwise treats
//! everything after the header as payload.
//!
//! Parsing rules:
//! - Never index (`buf[0]`) — always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{AgentWireError, Result};
use crate::protocol::flags::Flags;
use crate::protocol::version::Version;

/// Decoded frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Protocol version; selects whether the via field is on the wire.
    pub version: Version,
    /// Flag bit set.
    pub flags: Flags,
    /// Caller-allocated sequence number, monotonic per agent connection.
    pub sequence: u64,
    /// Payload length before compression, used to size the inflate buffer.
    pub uncompressed_len: u32,
    /// Management server node that owns the agent's connection.
    pub mgmt_id: u64,
    /// Logical destination agent.
    pub agent_id: u64,
    /// Agent terminating the connection when routed through a proxy.
    pub via_agent_id: u64,
}

impl FrameHeader {
    /// Encode to wire bytes. v1 emits the full 40-byte header; v3+ omits the
    /// via field and emits 32 bytes.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.version.header_len());
        buf.put_u8(self.version.ordinal());
        buf.put_u8(0); // reserved
        buf.put_u16(self.flags.bits());
        buf.put_u64(self.sequence);
        buf.put_u32(self.uncompressed_len);
        buf.put_u64(self.mgmt_id);
        buf.put_u64(self.agent_id);
        if self.version.carries_via() {
            buf.put_u64(self.via_agent_id);
        }
        buf.freeze()
    }

    /// Decode a header, consuming exactly the header bytes from `buf` and
    /// leaving the payload behind.
    pub fn decode(buf: &mut Bytes) -> Result<FrameHeader> {
        if buf.remaining() < 1 {
            return Err(AgentWireError::BadFrame("empty frame".into()));
        }
        let version = Version::from_wire(buf.get_u8())?;
        if buf.remaining() < version.header_len() - 1 {
            return Err(AgentWireError::BadFrame(format!(
                "header too short for {version:?}"
            )));
        }

        buf.get_u8(); // reserved
        let flags = Flags::from_bits(buf.get_u16());
        let sequence = buf.get_u64();
        let uncompressed_len = buf.get_u32();
        let mgmt_id = buf.get_u64();
        let agent_id = buf.get_u64();
        let via_agent_id = if version.carries_via() {
            buf.get_u64()
        } else {
            agent_id
        };

        Ok(FrameHeader {
            version,
            flags,
            sequence,
            uncompressed_len,
            mgmt_id,
            agent_id,
            via_agent_id,
        })
    }
}

/// A decoded frame: header plus opaque (possibly compressed) payload bytes.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Fixed header.
    pub header: FrameHeader,
    /// Everything after the header, zero-copy.
    pub payload: Bytes,
}

impl Frame {
    /// Decode a whole frame from bytes.
    pub fn decode(mut buf: Bytes) -> Result<Frame> {
        let header = FrameHeader::decode(&mut buf)?;
        Ok(Frame {
            header,
            payload: buf,
        })
    }
}
