//! Request/Response envelopes.
//!
//! The envelope is the unit orchestration code actually exchanges: addressed,
//! flagged, sequenced, and carrying either a raw JSON payload or the typed
//! object batch, converting lazily between the two. An envelope lives for one
//! encode/transmit or receive/decode cycle and is then discarded.
//!
//! Decoding any byte sequence yields a well-formed [`Request`]/[`Response`]
//! or a typed error; no partially-valid state escapes this module.

mod inner;
mod request;
mod response;

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::frame::Frame;
use crate::protocol::{compress, Flags};

use inner::Inner;
pub use request::Request;
pub use response::Response;

/// A decoded envelope, direction dispatched on the REQUEST flag.
#[derive(Debug)]
pub enum Message {
    Request(Request),
    Response(Response),
}

impl Message {
    /// The request, if this is one.
    pub fn into_request(self) -> Option<Request> {
        match self {
            Message::Request(request) => Some(request),
            Message::Response(_) => None,
        }
    }

    /// The response, if this is one.
    pub fn into_response(self) -> Option<Response> {
        match self {
            Message::Request(_) => None,
            Message::Response(response) => Some(response),
        }
    }
}

/// Decode a whole frame into an envelope: header gate, conditional inflate,
/// direction dispatch. The payload itself stays raw until first typed access.
pub fn decode(buf: Bytes) -> Result<Message> {
    let frame = Frame::decode(buf)?;
    let header = frame.header;

    let payload = if header.flags.contains(Flags::COMPRESSED) {
        compress::decompress(frame.payload, header.uncompressed_len as usize)
    } else {
        frame.payload
    };
    // Non-UTF-8 garbage is carried through lossily; the JSON parse failure it
    // causes later is handled by the bad-command sentinel, not here.
    let raw = String::from_utf8_lossy(&payload).into_owned();

    let inner = Inner::from_frame(header, raw);
    if header.flags.contains(Flags::REQUEST) {
        Ok(Message::Request(Request::from_inner(inner)))
    } else {
        Ok(Message::Response(Response::from_inner(inner)))
    }
}
