// src/adapters/serial_port.rs

//! Host serial port interface built on the `serialport` crate.

use crate::common::{
    frame::SerialSettings,
    hal_traits::{E2Serial, E2Timer},
};
use serialport::{DataBits, SerialPort};
use std::boxed::Box;
use std::io::{self, Read, Write};
use std::string::String;
use std::time::{Duration, Instant};

/// Read/write timeout on the underlying port. Reads never block on it because
/// `read_byte` checks `bytes_to_read` first.
const IO_TIMEOUT: Duration = Duration::from_millis(10);

/// An E2 link on a local serial port (`/dev/ttyUSB0`, `COM3`, ...).
///
/// The port is only opened by the master's first query, with RTS and DTR
/// asserted. Delays use `std::thread::sleep`, deadlines `std::time::Instant`,
/// so a write stuck in the port timeout still counts against the I/O bounds.
pub struct SerialPortInterface {
    path: String,
    settings: SerialSettings,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialPortInterface {
    /// Prepares an interface for `path`; trailing whitespace is ignored.
    pub fn new(path: &str) -> Self {
        Self::with_settings(path, SerialSettings::E2_DEFAULT)
    }

    pub fn with_settings(path: &str, settings: SerialSettings) -> Self {
        SerialPortInterface {
            path: path.trim().into(),
            settings,
            port: None,
        }
    }

    fn port_mut(&mut self) -> Result<&mut Box<dyn SerialPort>, serialport::Error> {
        self.port.as_mut().ok_or_else(|| {
            serialport::Error::new(serialport::ErrorKind::NoDevice, "port is not open")
        })
    }
}

impl core::fmt::Debug for SerialPortInterface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SerialPortInterface")
            .field("path", &self.path)
            .field("settings", &self.settings)
            .field("open", &self.port.is_some())
            .finish()
    }
}

fn data_bits(bits: u8) -> DataBits {
    match bits {
        5 => DataBits::Five,
        6 => DataBits::Six,
        7 => DataBits::Seven,
        _ => DataBits::Eight,
    }
}

/// Maps an I/O error to `nb`, treating timeouts as "not ready yet".
fn nb_io_error(e: io::Error) -> nb::Error<serialport::Error> {
    match e.kind() {
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut | io::ErrorKind::Interrupted => {
            nb::Error::WouldBlock
        }
        _ => nb::Error::Other(e.into()),
    }
}

impl E2Timer for SerialPortInterface {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

impl E2Serial for SerialPortInterface {
    type Error = serialport::Error;

    fn port_name(&self) -> &str {
        &self.path
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn open(&mut self) -> Result<(), Self::Error> {
        let mut port = serialport::new(self.path.as_str(), self.settings.baud_rate)
            .data_bits(data_bits(self.settings.data_bits))
            .timeout(IO_TIMEOUT)
            .open()?;
        // The module is powered from these lines
        port.write_request_to_send(self.settings.rts)?;
        port.write_data_terminal_ready(self.settings.dtr)?;
        self.port = Some(port);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        // Dropping the handle closes the port
        self.port = None;
        Ok(())
    }

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        let port = self.port_mut().map_err(nb::Error::Other)?;
        if port.bytes_to_read().map_err(nb::Error::Other)? == 0 {
            return Err(nb::Error::WouldBlock);
        }
        let mut byte = [0u8; 1];
        match port.read(&mut byte) {
            Ok(1) => Ok(byte[0]),
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(e) => Err(nb_io_error(e)),
        }
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        let port = self.port_mut().map_err(nb::Error::Other)?;
        match port.write(&[byte]) {
            Ok(1) => Ok(()),
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(e) => Err(nb_io_error(e)),
        }
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        let port = self.port_mut().map_err(nb::Error::Other)?;
        port.flush().map_err(nb_io_error)
    }
}
