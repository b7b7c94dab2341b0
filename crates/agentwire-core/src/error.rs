//! Shared error type across agentwire crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, AgentWireError>;

/// Unified error type for framing, payload, and compression failures.
///
/// Framing/version errors are fatal to the frame and bubble up to the
/// connection layer; payload-level errors bubble up to the orchestration
/// caller that asked for the typed objects.
#[derive(Debug, Error)]
pub enum AgentWireError {
    /// Version byte does not map to any named protocol version.
    #[error("unknown protocol version ordinal {0}")]
    UnknownVersion(u8),
    /// Version is named but not accepted on the wire (v2).
    #[error("incompatible protocol version ordinal {0}")]
    IncompatibleVersion(u8),
    /// Truncated or structurally invalid frame.
    #[error("bad frame: {0}")]
    BadFrame(String),
    /// Polymorphic wrapper key did not resolve to a registered type.
    #[error("unknown wire type: {0}")]
    UnknownType(String),
    /// Top-level payload is not valid JSON.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// A resolved element failed to encode/decode against its type.
    #[error("serde failure: {0}")]
    Serde(String),
    /// Gzip stream error while producing outbound bytes.
    #[error("compression failure: {0}")]
    Compression(String),
}

impl AgentWireError {
    /// Stable code string used by the connection layer and test vectors.
    pub fn code(&self) -> &'static str {
        match self {
            AgentWireError::UnknownVersion(_) => "UNKNOWN_VERSION",
            AgentWireError::IncompatibleVersion(_) => "INCOMPATIBLE_VERSION",
            AgentWireError::BadFrame(_) => "BAD_FRAME",
            AgentWireError::UnknownType(_) => "UNKNOWN_TYPE",
            AgentWireError::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            AgentWireError::Serde(_) => "SERDE",
            AgentWireError::Compression(_) => "COMPRESSION",
        }
    }
}
