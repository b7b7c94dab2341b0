//! Frame header vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use bytes::Bytes;

use agentwire_core::protocol::frame::Frame;
use agentwire_core::protocol::peek;

mod vector_loader;
use vector_loader::FrameVector;

fn load(name: &str) -> FrameVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn frame_vectors() {
    let files = [
        "header_v1_request.json",
        "header_v1_control_via.json",
        "header_v1_response_b64.json",
        "header_v3_via_implied.json",
        "header_v2_rejected.json",
        "header_unknown_version.json",
        "header_truncated.json",
    ];

    for f in files {
        let v = load(f);
        let raw = v.frame.bytes();
        let res = Frame::decode(Bytes::from(raw.clone()));

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code(), err.code, "vector={}", v.description);
            continue;
        }

        let frame = res.expect("expected ok frame");
        let ex = v.expect.expect("missing expect block");
        let h = frame.header;

        assert_eq!(h.version.ordinal() as u64, ex["version"].as_u64().unwrap(), "vector={}", v.description);
        assert_eq!(h.flags.bits() as u64, ex["flags"].as_u64().unwrap(), "vector={}", v.description);
        assert_eq!(h.sequence, ex["sequence"].as_u64().unwrap(), "vector={}", v.description);
        assert_eq!(h.uncompressed_len as u64, ex["uncompressed_len"].as_u64().unwrap(), "vector={}", v.description);
        assert_eq!(h.mgmt_id, ex["mgmt_id"].as_u64().unwrap(), "vector={}", v.description);
        assert_eq!(h.agent_id, ex["agent_id"].as_u64().unwrap(), "vector={}", v.description);
        assert_eq!(h.via_agent_id, ex["via_agent_id"].as_u64().unwrap(), "vector={}", v.description);
        assert_eq!(frame.payload.len() as u64, ex["payload_len"].as_u64().unwrap(), "vector={}", v.description);

        // The raw-offset accessors must agree with the full decode.
        assert_eq!(peek::version(&raw).unwrap(), h.version, "vector={}", v.description);
        assert_eq!(peek::sequence(&raw).unwrap(), h.sequence, "vector={}", v.description);
        assert_eq!(peek::uncompressed_len(&raw).unwrap(), h.uncompressed_len, "vector={}", v.description);
        assert_eq!(peek::management_server_id(&raw).unwrap(), h.mgmt_id, "vector={}", v.description);
        assert_eq!(peek::agent_id(&raw).unwrap(), h.agent_id, "vector={}", v.description);
        assert_eq!(peek::via_agent_id(&raw).unwrap(), h.via_agent_id, "vector={}", v.description);
        assert_eq!(peek::is_request(&raw).unwrap(), ex["is_request"].as_bool().unwrap(), "vector={}", v.description);
    }
}

#[test]
fn peek_gates_version_like_full_decode() {
    let v2 = load("header_v2_rejected.json").frame.bytes();
    assert_eq!(peek::version(&v2).unwrap_err().code(), "INCOMPATIBLE_VERSION");
    assert_eq!(peek::via_agent_id(&v2).unwrap_err().code(), "INCOMPATIBLE_VERSION");

    let unknown = load("header_unknown_version.json").frame.bytes();
    assert_eq!(peek::version(&unknown).unwrap_err().code(), "UNKNOWN_VERSION");
}

#[test]
fn peek_rejects_short_buffers() {
    let raw = load("header_truncated.json").frame.bytes();
    let err = peek::management_server_id(&raw).unwrap_err();
    assert_eq!(err.code(), "BAD_FRAME");
    let err = peek::via_agent_id(&raw).unwrap_err();
    assert_eq!(err.code(), "BAD_FRAME");
}
