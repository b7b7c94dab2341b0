//! Compression threshold and idempotence tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;

use agentwire_core::envelope::{self, Request};
use agentwire_core::payload::object::WireObject;
use agentwire_core::protocol::compress::{decompress, maybe_compress, COMPRESS_THRESHOLD};
use agentwire_core::protocol::{peek, Flags};

use wire_types::*;

fn payload_of(len: usize) -> Bytes {
    // Mildly structured so gzip has something to chew on.
    let raw: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    Bytes::from(raw)
}

#[test]
fn compresses_only_at_and_above_threshold() {
    for len in [0usize, 8191, 8192, 8193, 1024 * 1024] {
        let original = payload_of(len);
        let (out, compressed) = maybe_compress(original.clone());

        assert_eq!(
            compressed,
            len >= COMPRESS_THRESHOLD,
            "wrong flag for len {len}"
        );
        if compressed {
            let restored = decompress(out, len);
            assert_eq!(restored, original, "round trip failed for len {len}");
        } else {
            assert_eq!(out, original, "pass-through mutated bytes for len {len}");
        }
    }
}

#[test]
fn large_request_is_compressed_on_the_wire() {
    let commands: Vec<Box<dyn WireObject>> = vec![Box::new(StartVmCommand {
        vm_name: "x".repeat(10_000),
        cpu: 1,
    })];
    let mut request = Request::new(1, 1, commands, false, true);
    request.set_sequence(3);

    let [header, payload] = request.to_bytes().unwrap();
    let uncompressed_len = peek::uncompressed_len(&header).unwrap() as usize;
    assert!(uncompressed_len > 10_000);
    assert!(payload.len() < uncompressed_len, "wire payload must shrink");
    assert!(peek::version(&header).is_ok());

    let mut buf = Vec::with_capacity(header.len() + payload.len());
    buf.extend_from_slice(&header);
    buf.extend_from_slice(&payload);
    assert!(peek::is_request(&buf).unwrap());

    let mut decoded = envelope::decode(Bytes::from(buf))
        .unwrap()
        .into_request()
        .expect("request");
    assert!(decoded.flags().contains(Flags::COMPRESSED));

    let registry = command_registry();
    let commands = decoded.commands(&registry).unwrap();
    assert_eq!(commands.len(), 1);
    let vm = downcast::<StartVmCommand>(commands[0].as_ref());
    assert_eq!(vm.vm_name.len(), 10_000);
}

#[test]
fn small_request_stays_uncompressed() {
    let commands: Vec<Box<dyn WireObject>> = vec![Box::new(PingCommand {})];
    let mut request = Request::new(1, 1, commands, false, true);
    let bytes = request.get_bytes().unwrap();

    let mut decoded = envelope::decode(bytes).unwrap().into_request().expect("request");
    assert!(!decoded.flags().contains(Flags::COMPRESSED));
    let registry = command_registry();
    assert_eq!(decoded.commands(&registry).unwrap().len(), 1);
}
