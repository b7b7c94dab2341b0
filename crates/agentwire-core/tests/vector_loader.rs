//! Loader for the JSON frame vectors under `tests/vectors/`.
//!
//! A vector carries one encoded frame plus either an `expect` block of header
//! fields or an `expect_error` block naming the stable error code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FrameVector {
    pub description: String,
    pub frame: EncodedFrame,
    #[serde(default)]
    pub expect: Option<serde_json::Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectedError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedError {
    pub code: String,
}

/// Frame bytes in one of the supported text encodings.
#[derive(Debug, Deserialize)]
#[serde(tag = "encoding", content = "data", rename_all = "lowercase")]
pub enum EncodedFrame {
    Hex(String),
    Base64(String),
}

impl EncodedFrame {
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            EncodedFrame::Hex(data) => hex::decode(data).expect("invalid hex in test vector"),
            EncodedFrame::Base64(data) => {
                base64::decode(data).expect("invalid base64 in test vector")
            }
        }
    }
}
