//! Raw-offset header accessors.
//!
//! The connection layer routes and queues frames before it is willing to pay
//! for decompression and payload deserialization. These helpers read single
//! header fields straight out of an undecoded byte buffer at fixed offsets.
//! They validate only what they touch: the version byte (which fixes the
//! layout) and the presence of the field being read.

use crate::error::{AgentWireError, Result};
use crate::protocol::flags::Flags;
use crate::protocol::version::Version;

const OFF_FLAGS: usize = 2;
const OFF_SEQUENCE: usize = 4;
const OFF_UNCOMPRESSED_LEN: usize = 12;
const OFF_MGMT_ID: usize = 16;
const OFF_AGENT_ID: usize = 24;
const OFF_VIA_AGENT_ID: usize = 32;

fn short() -> AgentWireError {
    AgentWireError::BadFrame("frame too short for header field".into())
}

fn read_u16(bytes: &[u8], offset: usize) -> Result<u16> {
    match bytes.get(offset..offset + 2) {
        Some(s) => {
            let mut raw = [0u8; 2];
            raw.copy_from_slice(s);
            Ok(u16::from_be_bytes(raw))
        }
        None => Err(short()),
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32> {
    match bytes.get(offset..offset + 4) {
        Some(s) => {
            let mut raw = [0u8; 4];
            raw.copy_from_slice(s);
            Ok(u32::from_be_bytes(raw))
        }
        None => Err(short()),
    }
}

fn read_u64(bytes: &[u8], offset: usize) -> Result<u64> {
    match bytes.get(offset..offset + 8) {
        Some(s) => {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(s);
            Ok(u64::from_be_bytes(raw))
        }
        None => Err(short()),
    }
}

fn read_flags(bytes: &[u8]) -> Result<Flags> {
    Ok(Flags::from_bits(read_u16(bytes, OFF_FLAGS)?))
}

/// Protocol version, gated exactly as a full decode would gate it.
pub fn version(bytes: &[u8]) -> Result<Version> {
    match bytes.first() {
        Some(&b) => Version::from_wire(b),
        None => Err(short()),
    }
}

/// Sequence number.
pub fn sequence(bytes: &[u8]) -> Result<u64> {
    read_u64(bytes, OFF_SEQUENCE)
}

/// Uncompressed payload length.
pub fn uncompressed_len(bytes: &[u8]) -> Result<u32> {
    read_u32(bytes, OFF_UNCOMPRESSED_LEN)
}

/// Management server id.
pub fn management_server_id(bytes: &[u8]) -> Result<u64> {
    read_u64(bytes, OFF_MGMT_ID)
}

/// Logical destination agent id.
pub fn agent_id(bytes: &[u8]) -> Result<u64> {
    read_u64(bytes, OFF_AGENT_ID)
}

/// Via-agent id. Version-aware: v1 reads the wire field, v3+ returns the
/// agent id since the field is implied.
pub fn via_agent_id(bytes: &[u8]) -> Result<u64> {
    if version(bytes)?.carries_via() {
        read_u64(bytes, OFF_VIA_AGENT_ID)
    } else {
        read_u64(bytes, OFF_AGENT_ID)
    }
}

/// True when the REQUEST bit is set.
pub fn is_request(bytes: &[u8]) -> Result<bool> {
    Ok(read_flags(bytes)?.contains(Flags::REQUEST))
}

/// True when the CONTROL bit is set.
pub fn is_control(bytes: &[u8]) -> Result<bool> {
    Ok(read_flags(bytes)?.contains(Flags::CONTROL))
}

/// True when the FROM_SERVER bit is set.
pub fn is_from_server(bytes: &[u8]) -> Result<bool> {
    Ok(read_flags(bytes)?.contains(Flags::FROM_SERVER))
}

/// True when the batch must execute in order for its agent.
pub fn requires_sequential_execution(bytes: &[u8]) -> Result<bool> {
    Ok(read_flags(bytes)?.contains(Flags::IN_SEQUENCE))
}
