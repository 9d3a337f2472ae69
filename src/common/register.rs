// src/common/register.rs

use core::fmt;

/// A readable register on an E2 sensor module.
///
/// Each variant maps to the control byte sent in the command frame. The set is
/// closed: callers never build addresses by hand.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Register {
    /// Product group, low byte.
    GroupLow,
    /// Subgroup: output type in the high nibble, firmware type in the low nibble.
    Subgroup,
    /// Bitmask of physically available measurement channels.
    AvailableMeasurements,
    /// Product group, high byte.
    GroupHigh,
    /// Status of the last measurement cycle (0x00 = ok).
    Status,
    HumidityLow,
    HumidityHigh,
    TemperatureLow,
    TemperatureHigh,
    Value3Low,
    Value3High,
    Value4Low,
    Value4High,
}

impl Register {
    /// Every register, in ascending address order.
    pub const ALL: [Register; 13] = [
        Register::GroupLow,
        Register::Subgroup,
        Register::AvailableMeasurements,
        Register::GroupHigh,
        Register::Status,
        Register::HumidityLow,
        Register::HumidityHigh,
        Register::TemperatureLow,
        Register::TemperatureHigh,
        Register::Value3Low,
        Register::Value3High,
        Register::Value4Low,
        Register::Value4High,
    ];

    /// The control byte placed in the command frame for this register.
    #[inline]
    pub const fn address(self) -> u8 {
        match self {
            Register::GroupLow => 0x11,
            Register::Subgroup => 0x21,
            Register::AvailableMeasurements => 0x31,
            Register::GroupHigh => 0x41,
            Register::Status => 0x71,
            Register::HumidityLow => 0x81,
            Register::HumidityHigh => 0x91,
            Register::TemperatureLow => 0xA1,
            Register::TemperatureHigh => 0xB1,
            Register::Value3Low => 0xC1,
            Register::Value3High => 0xD1,
            Register::Value4Low => 0xE1,
            Register::Value4High => 0xF1,
        }
    }

    /// Looks up the register for a control byte, if it is one of the documented ones.
    pub fn from_address(address: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.address() == address)
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register.address()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:#04x})", self, self.address())
    }
}
