// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A point in time from an [`E2Timer`] clock.
///
/// Only differences and deadlines are ever computed, so any monotonic counter
/// with a `Duration` scale works. `std::time::Instant` qualifies.
pub trait E2Instant:
    Copy + PartialOrd + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

impl<T> E2Instant for T where
    T: Copy + PartialOrd + Add<Duration, Output = T> + Sub<T, Output = Duration>
{
}

/// Abstraction for timer/delay operations required by the E2 master.
///
/// Note: with the `impl-generic-hal` feature, `adapters::hal::HalDelay` provides
/// this on top of `embedded_hal::delay::DelayNs`.
pub trait E2Timer {
    /// Clock type used for I/O deadlines.
    type Instant: E2Instant;

    /// Current time. Must include time spent blocked inside serial calls.
    fn now(&self) -> Self::Instant;

    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for the half-duplex serial channel to one E2 module.
///
/// The channel has an explicit open/closed state: the master opens it on the
/// first query and keeps it open until told to close it.
pub trait E2Serial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Identifier of the underlying port (e.g. `/dev/ttyUSB0` or `COM3`).
    fn port_name(&self) -> &str;

    /// Whether the channel is currently open.
    fn is_open(&self) -> bool;

    /// Opens the channel. Only called while `is_open()` is false.
    fn open(&mut self) -> Result<(), Self::Error>;

    /// Closes the channel. Only called while `is_open()` is true.
    fn close(&mut self) -> Result<(), Self::Error>;

    /// Attempts to read a single byte from the receive buffer.
    ///
    /// Returns `Ok(byte)` if a byte was read, or `Err(nb::Error::WouldBlock)`
    /// if nothing has arrived. Must not wait for more bytes to arrive.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;

    /// Attempts to write a single byte to the serial interface.
    ///
    /// Returns `Ok(())` if the byte was accepted for transmission, or `Err(nb::Error::WouldBlock)`
    /// if the write buffer is full.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer, ensuring all written bytes have been sent.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;
}
