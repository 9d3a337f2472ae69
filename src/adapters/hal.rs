// src/adapters/hal.rs

//! `E2Timer` on top of `embedded-hal` 1.0 delays.

use crate::common::hal_traits::E2Timer;
use core::ops::{Add, Sub};
use core::time::Duration;
use embedded_hal::delay::DelayNs;

/// Time on a [`HalDelay`] clock, in microseconds since the wrapper was created.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DelayInstant(u64);

impl DelayInstant {
    pub const fn as_micros(&self) -> u64 {
        self.0
    }
}

impl Add<Duration> for DelayInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        let us = u64::try_from(rhs.as_micros()).unwrap_or(u64::MAX);
        DelayInstant(self.0.saturating_add(us))
    }
}

impl Sub for DelayInstant {
    type Output = Duration;
    fn sub(self, rhs: Self) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

/// Wraps any `DelayNs` implementation (a HAL timer, `cortex_m::delay::Delay`, ...).
///
/// `DelayNs` has no clock, so `now()` only advances by the delays performed
/// through this wrapper. Pair it with a serial half whose `nb` calls return
/// immediately, as UART peripherals do.
#[derive(Debug)]
pub struct HalDelay<D> {
    delay: D,
    elapsed: DelayInstant,
}

impl<D: DelayNs> HalDelay<D> {
    pub fn new(delay: D) -> Self {
        HalDelay {
            delay,
            elapsed: DelayInstant(0),
        }
    }

    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> E2Timer for HalDelay<D> {
    type Instant = DelayInstant;

    fn now(&self) -> DelayInstant {
        self.elapsed
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
        self.elapsed = self.elapsed + Duration::from_micros(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
        self.elapsed = self.elapsed + Duration::from_millis(u64::from(ms));
    }
}
