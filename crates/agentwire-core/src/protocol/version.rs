//! Protocol version gate.
//!
//! Three versions are named; only v1 and v3 are accepted on the wire. v2 is a
//! retired value that parsing rejects unconditionally (`IncompatibleVersion`,
//! distinct from the `UnknownVersion` raised for unnamed ordinals). Do not
//! collapse the two rejections: peers rely on telling them apart.

use crate::error::{AgentWireError, Result};

/// Named protocol versions. The wire carries the ordinal in the first header
/// byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Version {
    /// Original framing: the via-agent field is present on the wire.
    V1 = 0,
    /// Named but rejected during parsing.
    V2 = 1,
    /// Via-agent is implied equal to the agent id and absent from the wire.
    V3 = 2,
}

impl Version {
    /// Version stamped on outbound frames.
    pub const CURRENT: Version = Version::V1;

    /// Map a wire ordinal to a usable version.
    pub fn from_wire(ordinal: u8) -> Result<Version> {
        match ordinal {
            0 => Ok(Version::V1),
            1 => Err(AgentWireError::IncompatibleVersion(ordinal)),
            2 => Ok(Version::V3),
            other => Err(AgentWireError::UnknownVersion(other)),
        }
    }

    /// Ordinal written to the wire.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Header length in bytes. v1 carries the 8-byte via-agent field; v3+
    /// implies it, so the two header lengths differ.
    pub fn header_len(self) -> usize {
        match self {
            Version::V1 => 40,
            Version::V2 | Version::V3 => 32,
        }
    }

    /// True when the via-agent field is a separate wire field.
    pub fn carries_via(self) -> bool {
        matches!(self, Version::V1)
    }
}
