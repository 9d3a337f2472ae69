// src/master/sync_master/mock.rs

//! Scripted stand-in for an E2 module behind a serial port, for unit tests.

use crate::common::{
    command::COMMAND_FRAME_LEN,
    hal_traits::{E2Serial, E2Timer},
    response::ResponseFrame,
};
use core::time::Duration;
use std::collections::{HashMap, VecDeque};

// --- Mock Instant ---
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MockInstant(pub u64);

impl core::ops::Add<Duration> for MockInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        MockInstant(self.0.saturating_add(rhs.as_micros() as u64))
    }
}

impl core::ops::Sub<MockInstant> for MockInstant {
    type Output = Duration;
    fn sub(self, rhs: MockInstant) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

// --- Mock Comm Error ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MockError {
    OpenFailed,
    NotOpen,
    WriteFailed,
    ReadFailed,
}

/// How the simulated module answers a command for one address.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Reply {
    /// Well-formed success frame carrying this byte.
    Payload(u8),
    /// Exactly these bytes.
    Raw(Vec<u8>),
    /// No answer at all.
    Silent,
}

#[derive(Debug)]
pub(crate) struct MockInterface {
    port: String,
    pub open: bool,
    pub fail_open: bool,
    pub fail_write: bool,
    pub fail_read: bool,
    pub write_would_block: bool,
    /// Time a single `write_byte` call spends blocked, in microseconds.
    pub write_cost_us: u64,
    pub open_calls: u32,
    pub close_calls: u32,
    pub flush_calls: u32,
    replies: HashMap<u8, Reply>,
    rx: VecDeque<u8>,
    pending: Vec<u8>,
    /// Every byte written, in order.
    pub tx_log: Vec<u8>,
    /// Control byte of every complete command frame, in order.
    pub queried: Vec<u8>,
    /// Millisecond delays requested through `delay_ms`.
    pub delays_ms: Vec<u32>,
    /// Microsecond delays requested through `delay_us`.
    pub delays_us: Vec<u32>,
    /// Mock clock, advanced by delays and blocked writes.
    pub elapsed_us: u64,
}

impl MockInterface {
    pub fn new(port: &str) -> Self {
        MockInterface {
            port: port.to_string(),
            open: false,
            fail_open: false,
            fail_write: false,
            fail_read: false,
            write_would_block: false,
            write_cost_us: 0,
            open_calls: 0,
            close_calls: 0,
            flush_calls: 0,
            replies: HashMap::new(),
            rx: VecDeque::new(),
            pending: Vec::new(),
            tx_log: Vec::new(),
            queried: Vec::new(),
            delays_ms: Vec::new(),
            delays_us: Vec::new(),
            elapsed_us: 0,
        }
    }

    pub fn set_reply(&mut self, address: u8, reply: Reply) {
        self.replies.insert(address, reply);
    }

    /// Puts bytes straight into the receive buffer.
    pub fn stage_rx(&mut self, data: &[u8]) {
        self.rx.extend(data.iter().copied());
    }

    fn answer(&mut self, address: u8) {
        match self.replies.get(&address).cloned().unwrap_or(Reply::Silent) {
            Reply::Payload(byte) => self.stage_rx(ResponseFrame::ideal(byte).as_bytes()),
            Reply::Raw(bytes) => self.stage_rx(&bytes),
            Reply::Silent => {}
        }
    }
}

impl E2Timer for MockInterface {
    type Instant = MockInstant;

    fn now(&self) -> MockInstant {
        MockInstant(self.elapsed_us)
    }

    fn delay_us(&mut self, us: u32) {
        self.delays_us.push(us);
        self.elapsed_us += u64::from(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        self.elapsed_us += u64::from(ms) * 1000;
    }
}

impl E2Serial for MockInterface {
    type Error = MockError;

    fn port_name(&self) -> &str {
        &self.port
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) -> Result<(), Self::Error> {
        self.open_calls += 1;
        if self.fail_open {
            return Err(MockError::OpenFailed);
        }
        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.close_calls += 1;
        self.open = false;
        Ok(())
    }

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        if self.fail_read {
            return Err(nb::Error::Other(MockError::ReadFailed));
        }
        self.rx.pop_front().ok_or(nb::Error::WouldBlock)
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        if !self.open {
            return Err(nb::Error::Other(MockError::NotOpen));
        }
        if self.fail_write {
            return Err(nb::Error::Other(MockError::WriteFailed));
        }
        self.elapsed_us += self.write_cost_us;
        if self.write_would_block {
            return Err(nb::Error::WouldBlock);
        }
        self.tx_log.push(byte);
        self.pending.push(byte);
        if self.pending.len() == COMMAND_FRAME_LEN {
            let address = self.pending[2];
            self.pending.clear();
            self.queried.push(address);
            self.answer(address);
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.flush_calls += 1;
        Ok(())
    }
}
