// src/master/sync_master/io_helpers.rs

use super::SyncMaster; // Access SyncMaster definition
use crate::common::{
    error::E2Error,
    hal_traits::{E2Serial, E2Timer},
    response::RESPONSE_LEN,
    timing,
};
use arrayvec::ArrayVec;
use core::time::Duration;
use nb::Result as NbResult;

/// Receive buffer size. Anything longer than a response is invalid anyway.
pub(super) const RX_CAPACITY: usize = RESPONSE_LEN * 2;

/// Upper bound on bytes drained per read, so a chattering line cannot stall the master.
const RX_DRAIN_LIMIT: usize = 64;

pub(super) type RxBuffer = ArrayVec<u8, RX_CAPACITY>;

// Implementation block for I/O related helpers
impl<IF> SyncMaster<IF>
where
    IF: E2Serial + E2Timer,
{
    /// Executes a non-blocking I/O operation (`f`) repeatedly until it
    /// stops returning `WouldBlock`, returning the final result or a timeout error.
    ///
    /// The deadline is taken from the interface clock, so time spent inside `f`
    /// counts as well as the poll delays.
    pub(super) fn execute_blocking_io_with_timeout<FN, T>(
        &mut self,
        timeout: Duration,
        mut f: FN,
    ) -> Result<T, E2Error<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        let poll_us = timing::as_micros_u32(timing::POLL_INTERVAL);
        let deadline = self.interface.now() + timeout;

        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(E2Error::Timeout);
                    }
                    self.interface.delay_us(poll_us);
                }
                Err(nb::Error::Other(e)) => return Err(E2Error::Io(e)),
            }
        }
    }

    /// Blocks for `duration`: whole milliseconds through `delay_ms`, any
    /// sub-millisecond rest through `delay_us`.
    pub(super) fn delay_for(&mut self, duration: Duration) {
        let (ms, us) = timing::split_millis(duration);
        if ms > 0 {
            self.interface.delay_ms(ms);
        }
        if us > 0 {
            self.interface.delay_us(us);
        }
    }

    /// Opens the port unless it already is, waiting the open settle time once.
    pub(super) fn ensure_open(&mut self) -> Result<(), E2Error<IF::Error>> {
        if self.interface.is_open() {
            return Ok(());
        }
        self.interface.open().map_err(E2Error::Io)?;
        log::debug!("Opened E2 port {}", self.interface.port_name());
        self.delay_for(self.config.port_open_delay);
        Ok(())
    }

    /// Sends already encoded command bytes and flushes them onto the wire.
    ///
    /// The flush bound covers the bytes' time on the wire plus `FLUSH_TIMEOUT`.
    pub(super) fn send_command_bytes(&mut self, cmd_bytes: &[u8]) -> Result<(), E2Error<IF::Error>> {
        for byte in cmd_bytes {
            self.execute_blocking_io_with_timeout(timing::WRITE_TIMEOUT, |iface| {
                iface.write_byte(*byte)
            })?;
        }
        let flush_timeout = timing::wire_time(cmd_bytes.len()) + timing::FLUSH_TIMEOUT;
        self.execute_blocking_io_with_timeout(flush_timeout, |iface| iface.flush())?;
        Ok(())
    }

    /// Blocks for the configured response delay.
    pub(super) fn wait_for_response(&mut self) {
        self.delay_for(self.config.response_delay);
    }

    /// Takes whatever bytes are pending right now, without waiting for more.
    ///
    /// More than `RX_CAPACITY` pending bytes is reported as an overflow after the
    /// excess has been drained.
    pub(super) fn read_available(&mut self) -> Result<RxBuffer, E2Error<IF::Error>> {
        let mut buffer = RxBuffer::new();
        let mut overflow = false;

        for _ in 0..RX_DRAIN_LIMIT {
            match self.interface.read_byte() {
                Ok(byte) => {
                    if buffer.try_push(byte).is_err() {
                        overflow = true;
                    }
                }
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(e)) => return Err(E2Error::Io(e)),
            }
        }

        if overflow {
            return Err(E2Error::BufferOverflow {
                capacity: RX_CAPACITY,
            });
        }
        Ok(buffer)
    }
}
