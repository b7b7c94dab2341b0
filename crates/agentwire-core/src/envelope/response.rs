//! Answer batch paired with the request it answers.

use bytes::Bytes;

use crate::error::Result;
use crate::payload::object::{Severity, WireObject};
use crate::payload::registry::WireRegistry;
use crate::protocol::Flags;

use super::inner::Inner;
use super::request::Request;

/// The response half of an exchange: same shape as a request, built from the
/// originating request plus the answers.
#[derive(Debug)]
pub struct Response {
    inner: Inner,
}

impl Response {
    /// Answer `request`, inheriting its sequence, addressing, STOP_ON_ERROR
    /// and IN_SEQUENCE, clearing REQUEST and flipping FROM_SERVER.
    pub fn new(request: &Request, answers: Vec<Box<dyn WireObject>>) -> Response {
        Self::with_addresses(
            request,
            answers,
            request.management_server_id(),
            request.via_agent_id(),
        )
    }

    /// Variant overriding the management server and via ids, for answers that
    /// travel back through a different node or proxy than the request came
    /// in on.
    pub fn with_addresses(
        request: &Request,
        answers: Vec<Box<dyn WireObject>>,
        mgmt_id: u64,
        via_agent_id: u64,
    ) -> Response {
        let source = request.inner();
        let mut flags = source.flags;
        flags.set(Flags::REQUEST, false);
        flags.set(Flags::FROM_SERVER, !source.flags.contains(Flags::FROM_SERVER));
        // COMPRESSED belongs to emission; never inherit it.
        flags.set(Flags::COMPRESSED, false);

        let mut inner = Inner::outbound(source.agent_id, via_agent_id, mgmt_id, flags, answers);
        inner.sequence = source.sequence;
        inner.agent_name = source.agent_name.clone();
        Response { inner }
    }

    pub(crate) fn from_inner(inner: Inner) -> Response {
        Response { inner }
    }

    pub fn sequence(&self) -> u64 {
        self.inner.sequence
    }

    pub fn agent_id(&self) -> u64 {
        self.inner.agent_id
    }

    pub fn management_server_id(&self) -> u64 {
        self.inner.mgmt_id
    }

    pub fn via_agent_id(&self) -> u64 {
        self.inner.via_agent_id
    }

    pub fn flags(&self) -> Flags {
        self.inner.flags
    }

    pub fn stop_on_error(&self) -> bool {
        self.inner.flags.contains(Flags::STOP_ON_ERROR)
    }

    pub fn in_sequence(&self) -> bool {
        self.inner.flags.contains(Flags::IN_SEQUENCE)
    }

    pub fn from_server(&self) -> bool {
        self.inner.flags.contains(Flags::FROM_SERVER)
    }

    pub fn is_control(&self) -> bool {
        self.inner.flags.contains(Flags::CONTROL)
    }

    /// Typed answer batch, materialized lazily and memoized. Malformed
    /// top-level JSON yields the one-element bad-command sentinel batch.
    pub fn answers(&mut self, registry: &WireRegistry) -> Result<&[Box<dyn WireObject>]> {
        self.inner.objects(registry)
    }

    /// `[header, payload]` scatter pair ready for a writev-style sink.
    pub fn to_bytes(&mut self) -> Result<[Bytes; 2]> {
        self.inner.to_bytes()
    }

    /// One contiguous buffer.
    pub fn get_bytes(&mut self) -> Result<Bytes> {
        self.inner.get_bytes()
    }

    /// Redacted rendering for diagnostic logging.
    pub fn log_line(&self, effective: Severity) -> String {
        self.inner.log_line(effective)
    }
}
