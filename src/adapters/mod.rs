// src/adapters/mod.rs

//! Ready-made interfaces for `SyncMaster`.
//!
//! [`Interface`] glues any `E2Serial` to any `E2Timer`. The feature-gated
//! modules provide those halves for common platforms.

use crate::common::hal_traits::{E2Serial, E2Timer};

#[cfg(feature = "impl-generic-hal")]
pub mod hal;

#[cfg(feature = "impl-serialport")]
pub mod serial_port;

/// Combines a serial channel and a delay source into one master interface.
#[derive(Debug)]
pub struct Interface<S, T> {
    pub serial: S,
    pub timer: T,
}

impl<S, T> Interface<S, T> {
    pub fn new(serial: S, timer: T) -> Self {
        Interface { serial, timer }
    }

    pub fn into_parts(self) -> (S, T) {
        (self.serial, self.timer)
    }
}

impl<S, T: E2Timer> E2Timer for Interface<S, T> {
    type Instant = T::Instant;

    fn now(&self) -> Self::Instant {
        self.timer.now()
    }

    fn delay_us(&mut self, us: u32) {
        self.timer.delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timer.delay_ms(ms)
    }
}

impl<S: E2Serial, T> E2Serial for Interface<S, T> {
    type Error = S::Error;

    fn port_name(&self) -> &str {
        self.serial.port_name()
    }

    fn is_open(&self) -> bool {
        self.serial.is_open()
    }

    fn open(&mut self) -> Result<(), Self::Error> {
        self.serial.open()
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.serial.close()
    }

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        self.serial.read_byte()
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        self.serial.write_byte(byte)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.serial.flush()
    }
}
