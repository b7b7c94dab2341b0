//! Outbound command batch addressed to an agent.

use bytes::Bytes;

use crate::error::Result;
use crate::payload::object::{Severity, WireObject};
use crate::payload::registry::WireRegistry;
use crate::protocol::Flags;

use super::inner::Inner;

/// A sequenced, addressed command batch.
///
/// The sequence number is caller-owned (a connection-scoped monotonic
/// counter) and set via [`Request::set_sequence`] before emission.
#[derive(Debug)]
pub struct Request {
    inner: Inner,
}

impl Request {
    /// Standard construction: via equals the destination agent.
    ///
    /// `IN_SEQUENCE` is derived here, once: set when any command in the batch
    /// demands sequential execution.
    pub fn new(
        agent_id: u64,
        mgmt_id: u64,
        commands: Vec<Box<dyn WireObject>>,
        stop_on_error: bool,
        from_server: bool,
    ) -> Request {
        let flags = Self::derive_flags(&commands, stop_on_error, from_server);
        Request {
            inner: Inner::outbound(agent_id, agent_id, mgmt_id, flags, commands),
        }
    }

    /// Construction with a human-readable agent name carried for log output
    /// only; the name never reaches the wire.
    pub fn with_agent_name(
        agent_id: u64,
        mgmt_id: u64,
        agent_name: impl Into<String>,
        commands: Vec<Box<dyn WireObject>>,
        stop_on_error: bool,
        from_server: bool,
    ) -> Request {
        let mut request = Self::new(agent_id, mgmt_id, commands, stop_on_error, from_server);
        request.inner.agent_name = Some(agent_name.into());
        request
    }

    /// Advanced construction: explicit via for proxy routing and explicit
    /// flags. The REQUEST bit is still enforced and IN_SEQUENCE still
    /// derived; everything else is the caller's to set.
    pub fn with_via(
        agent_id: u64,
        via_agent_id: u64,
        mgmt_id: u64,
        flags: Flags,
        commands: Vec<Box<dyn WireObject>>,
    ) -> Request {
        let mut flags = flags.with(Flags::REQUEST);
        flags.set(Flags::IN_SEQUENCE, Inner::any_in_sequence(&commands));
        Request {
            inner: Inner::outbound(agent_id, via_agent_id, mgmt_id, flags, commands),
        }
    }

    pub(crate) fn from_inner(inner: Inner) -> Request {
        Request { inner }
    }

    pub(crate) fn inner(&self) -> &Inner {
        &self.inner
    }

    fn derive_flags(
        commands: &[Box<dyn WireObject>],
        stop_on_error: bool,
        from_server: bool,
    ) -> Flags {
        let mut flags = Flags::REQUEST;
        flags.set(Flags::STOP_ON_ERROR, stop_on_error);
        flags.set(Flags::FROM_SERVER, from_server);
        flags.set(Flags::IN_SEQUENCE, Inner::any_in_sequence(commands));
        flags
    }

    /// Caller-allocated sequence number; assign before emission.
    pub fn set_sequence(&mut self, sequence: u64) {
        self.inner.sequence = sequence;
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

    /// Agent name carried for log output, when construction supplied one.
    pub fn agent_name(&self) -> Option<&str> {
        self.inner.agent_name.as_deref()
    }

    /// Typed command batch, materialized lazily and memoized. Malformed
    /// top-level JSON yields the one-element bad-command sentinel batch.
    pub fn commands(&mut self, registry: &WireRegistry) -> Result<&[Box<dyn WireObject>]> {
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
