// src/common/frame.rs

/// Serial line settings an E2 transport must apply when opening the port.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SerialSettings {
    pub baud_rate: u32,
    pub data_bits: u8,
    /// Request-to-send asserted. The module is powered through the control lines.
    pub rts: bool,
    /// Data-terminal-ready asserted.
    pub dtr: bool,
}

impl SerialSettings {
    /// 9600 baud, 8 data bits, RTS and DTR asserted. Parity and stop bits are
    /// left at the platform default.
    pub const E2_DEFAULT: SerialSettings = SerialSettings {
        baud_rate: 9600,
        data_bits: 8,
        rts: true,
        dtr: true,
    };
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self::E2_DEFAULT
    }
}
