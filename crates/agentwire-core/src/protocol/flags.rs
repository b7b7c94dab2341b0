//! Frame flag bit set (u16 at header offset 2).
//!
//! Flags are fixed at envelope construction; `COMPRESSED` alone is stamped at
//! emission time once the payload size is known.

use std::ops::BitOr;

/// 16-bit flag set carried in every frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u16);

impl Flags {
    /// Request (set) vs response (clear); interpreted by direction.
    pub const REQUEST: Flags = Flags(0x0001);
    /// Abort the rest of the batch after the first failing command.
    pub const STOP_ON_ERROR: Flags = Flags(0x0002);
    /// Batch must execute in order relative to other batches for this agent.
    pub const IN_SEQUENCE: Flags = Flags(0x0004);
    /// Originated at the management server rather than an agent.
    pub const FROM_SERVER: Flags = Flags(0x0008);
    /// Control-plane frame (connection management, not orchestration work).
    pub const CONTROL: Flags = Flags(0x0010);
    /// Payload bytes are gzip-compressed.
    pub const COMPRESSED: Flags = Flags(0x0020);

    /// No flags set.
    pub const fn empty() -> Flags {
        Flags(0)
    }

    /// Raw bits as written to the wire.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Reconstruct from wire bits. Unknown bits are preserved verbatim so a
    /// response echoes what a newer peer sent.
    pub const fn from_bits(bits: u16) -> Flags {
        Flags(bits)
    }

    /// True when every bit of `other` is set.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Copy with `other` set.
    pub const fn with(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    /// Set or clear `other` in place.
    pub fn set(&mut self, other: Flags, on: bool) {
        if on {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        self.with(rhs)
    }
}
