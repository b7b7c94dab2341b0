//! Payload compression rule.
//!
//! Payloads at or above [`COMPRESS_THRESHOLD`] bytes are gzip-compressed on
//! the way out; the header always records the uncompressed length so the
//! decoder can size its inflate buffer up front.
//!
//! Known risk, kept on purpose: a gzip stream error on either side is logged
//! and the call continues with whatever bytes were produced so far instead of
//! failing the frame. Existing peers depend on this observable behavior.

use std::io::{Read, Write};

use bytes::Bytes;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Uncompressed payload size at and above which gzip is applied.
pub const COMPRESS_THRESHOLD: usize = 8192;

/// Compress `payload` when it reaches the threshold. The returned bool tells
/// the caller whether to set the COMPRESSED flag. Encoder failure falls back
/// to the uncompressed bytes.
pub fn maybe_compress(payload: Bytes) -> (Bytes, bool) {
    if payload.len() < COMPRESS_THRESHOLD {
        return (payload, false);
    }

    let mut encoder = GzEncoder::new(
        Vec::with_capacity(payload.len() / 2),
        Compression::default(),
    );
    if let Err(err) = encoder.write_all(&payload) {
        tracing::error!(error = %err, "gzip encode failed, sending uncompressed");
        return (payload, false);
    }
    match encoder.finish() {
        Ok(compressed) => (Bytes::from(compressed), true),
        Err(err) => {
            tracing::error!(error = %err, "gzip finish failed, sending uncompressed");
            (payload, false)
        }
    }
}

/// Inflate `payload` into a buffer preallocated to `uncompressed_len`. A
/// stream error is logged and the partially inflated buffer is returned.
pub fn decompress(payload: Bytes, uncompressed_len: usize) -> Bytes {
    let mut out = Vec::with_capacity(uncompressed_len);
    let mut decoder = GzDecoder::new(payload.as_ref());
    if let Err(err) = decoder.read_to_end(&mut out) {
        tracing::error!(
            error = %err,
            inflated = out.len(),
            expected = uncompressed_len,
            "gzip decode failed, continuing with partial buffer"
        );
    }
    Bytes::from(out)
}
