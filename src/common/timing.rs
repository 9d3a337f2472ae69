// src/common/timing.rs

use core::time::Duration;

// E2 modules document no processing times. These are experimental values for
// a 9600 baud link.

// === Port Handling ===

/// Settle time after opening the port, before the first command.
pub const PORT_OPEN_DELAY: Duration = Duration::from_millis(100);
/// Settle time after closing the port.
pub const PORT_CLOSE_DELAY: Duration = Duration::from_millis(100);

// === Command/Response Timing ===

/// Default wait between sending a command and reading the response.
/// Rather long; shorter values lose responses on some modules.
pub const RESPONSE_DELAY: Duration = Duration::from_millis(400);

/// Upper bound for pushing a single command frame into the transmit buffer.
pub const WRITE_TIMEOUT: Duration = Duration::from_millis(50);
/// Upper bound for a transmit flush.
pub const FLUSH_TIMEOUT: Duration = Duration::from_millis(20);
/// Poll interval while a non-blocking write or flush returns `WouldBlock`.
pub const POLL_INTERVAL: Duration = Duration::from_micros(100);

// === Byte Timing at 9600 Baud (8N1) ===
// 1 start bit + 8 data bits + 1 stop bit = 10 bits per byte

/// Nominal duration of a single byte (10 bits total) at 9600 baud.
pub const BYTE_DURATION: Duration = Duration::from_nanos(1_041_667); // Approx 1.04 ms

/// Converts a duration to whole milliseconds for `E2Timer::delay_ms`, saturating.
pub fn as_millis_u32(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Time `len` bytes occupy on the wire.
pub fn wire_time(len: usize) -> Duration {
    BYTE_DURATION.saturating_mul(u32::try_from(len).unwrap_or(u32::MAX))
}

/// Splits a duration into whole milliseconds and the remaining microseconds.
pub fn split_millis(duration: Duration) -> (u32, u32) {
    (as_millis_u32(duration), duration.subsec_micros() % 1_000)
}

/// Converts a duration to whole microseconds for `E2Timer::delay_us`, saturating.
pub fn as_micros_u32(duration: Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}
