//! E2 command frame definitions.
//!
//! A master reads one register per exchange by sending a fixed 4-byte frame:
//! `[B] [L] [D] [C]` = marker, length, control byte (register address), checksum.

use core::fmt;

use super::register::Register;

/// Marker byte that opens every E2 frame, in both directions.
pub const PROTOCOL_MARKER: u8 = 0x51;

/// Length field of a read command: one control byte follows.
pub const COMMAND_LENGTH: u8 = 0x01;

/// Size of an encoded command frame in bytes.
pub const COMMAND_FRAME_LEN: usize = 4;

/// An encoded read command for a single register.
///
/// Immutable once built. The `Display` implementation renders the raw bytes as
/// hex (e.g. `51 01 81 D3`), which is what the master logs before sending.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CommandFrame([u8; COMMAND_FRAME_LEN]);

impl CommandFrame {
    /// Builds the read command for a documented register.
    pub fn new(register: Register) -> Self {
        Self::for_address(register.address())
    }

    /// Builds a read command for a raw control byte.
    ///
    /// Encoding cannot fail: any byte produces a well-formed frame, even if the
    /// sensor will reject the address.
    pub const fn for_address(address: u8) -> Self {
        let checksum = PROTOCOL_MARKER
            .wrapping_add(COMMAND_LENGTH)
            .wrapping_add(address);
        CommandFrame([PROTOCOL_MARKER, COMMAND_LENGTH, address, checksum])
    }

    /// The control byte (register address) carried by this frame.
    #[inline]
    pub const fn address(&self) -> u8 {
        self.0[2]
    }

    /// The checksum byte of this frame.
    #[inline]
    pub const fn checksum(&self) -> u8 {
        self.0[3]
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; COMMAND_FRAME_LEN] {
        &self.0
    }
}

impl From<Register> for CommandFrame {
    fn from(register: Register) -> Self {
        CommandFrame::new(register)
    }
}

impl AsRef<[u8]> for CommandFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for CommandFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b, l, d, c] = self.0;
        write!(f, "{:02X} {:02X} {:02X} {:02X}", b, l, d, c)
    }
}
