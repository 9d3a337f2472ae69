// src/common/types.rs

use core::fmt;

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Status register value meaning the measurement cycle is valid.
pub const STATUS_OK: u8 = 0x00;

// --- Capability bitmask (register 0x31) ---

/// Which measurement channels the attached module physically provides.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet {
    pub humidity: bool,
    pub temperature: bool,
    pub air_velocity: bool,
    pub co2: bool,
}

impl CapabilitySet {
    const HUMIDITY_BIT: u8 = 1 << 0;
    const TEMPERATURE_BIT: u8 = 1 << 1;
    const AIR_VELOCITY_BIT: u8 = 1 << 2;
    const CO2_BIT: u8 = 1 << 3;

    /// Nothing assumed present. Used when the bitmask cannot be read.
    pub const NONE: CapabilitySet = CapabilitySet {
        humidity: false,
        temperature: false,
        air_velocity: false,
        co2: false,
    };

    /// Decodes the bitmask byte (bit 0 = least significant).
    pub const fn from_bits(bits: u8) -> Self {
        CapabilitySet {
            humidity: bits & Self::HUMIDITY_BIT != 0,
            temperature: bits & Self::TEMPERATURE_BIT != 0,
            air_velocity: bits & Self::AIR_VELOCITY_BIT != 0,
            co2: bits & Self::CO2_BIT != 0,
        }
    }

    /// Re-encodes the set into the four low bits.
    pub const fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.humidity {
            bits |= Self::HUMIDITY_BIT;
        }
        if self.temperature {
            bits |= Self::TEMPERATURE_BIT;
        }
        if self.air_velocity {
            bits |= Self::AIR_VELOCITY_BIT;
        }
        if self.co2 {
            bits |= Self::CO2_BIT;
        }
        bits
    }
}

// --- Measurement values ---

/// One sampling cycle, in engineering units.
///
/// `NaN` marks a channel that is unavailable for this cycle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeasurementValues {
    /// Relative humidity in %RH.
    pub humidity: f64,
    /// Temperature in °C.
    pub temperature: f64,
    /// Generic channel 3 (air velocity on modules that have it), raw value.
    pub value3: f64,
    /// Generic channel 4 (CO2 on modules that have it), raw value.
    pub value4: f64,
}

impl MeasurementValues {
    /// A cycle where every channel is unavailable.
    pub const UNAVAILABLE: MeasurementValues = MeasurementValues {
        humidity: f64::NAN,
        temperature: f64::NAN,
        value3: f64::NAN,
        value4: f64::NAN,
    };

    pub fn humidity(&self) -> Option<f64> {
        available(self.humidity)
    }

    pub fn temperature(&self) -> Option<f64> {
        available(self.temperature)
    }

    pub fn value3(&self) -> Option<f64> {
        available(self.value3)
    }

    pub fn value4(&self) -> Option<f64> {
        available(self.value4)
    }

    /// True if no channel carries a value.
    pub fn is_unavailable(&self) -> bool {
        self.humidity.is_nan()
            && self.temperature.is_nan()
            && self.value3.is_nan()
            && self.value4.is_nan()
    }
}

impl Default for MeasurementValues {
    fn default() -> Self {
        Self::UNAVAILABLE
    }
}

impl fmt::Display for MeasurementValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} %RH, {:.2} °C, v3={}, v4={}",
            self.humidity, self.temperature, self.value3, self.value4
        )
    }
}

fn available(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// The register bytes gathered during one cycle, before decoding.
///
/// Each field is `None` if the register was not queried or did not answer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RawMeasurement {
    pub humidity_low: Option<u8>,
    pub humidity_high: Option<u8>,
    pub temperature_low: Option<u8>,
    pub temperature_high: Option<u8>,
    pub value3_low: Option<u8>,
    pub value3_high: Option<u8>,
    pub value4_low: Option<u8>,
    pub value4_high: Option<u8>,
    pub status: Option<u8>,
}

impl RawMeasurement {
    /// Folds the raw bytes into engineering units.
    ///
    /// A missing or non-zero status invalidates the whole cycle. Otherwise each
    /// channel is decoded independently and is `NaN` if either byte is missing.
    pub fn decode(&self) -> MeasurementValues {
        if self.status != Some(STATUS_OK) {
            return MeasurementValues::UNAVAILABLE;
        }

        let mut values = MeasurementValues::UNAVAILABLE;
        if let Some(raw) = combine(self.humidity_low, self.humidity_high) {
            values.humidity = raw / 100.0;
        }
        if let Some(raw) = combine(self.temperature_low, self.temperature_high) {
            values.temperature = raw / 100.0 - KELVIN_OFFSET;
        }
        if let Some(raw) = combine(self.value3_low, self.value3_high) {
            values.value3 = raw;
        }
        if let Some(raw) = combine(self.value4_low, self.value4_high) {
            values.value4 = raw;
        }
        values
    }
}

/// `low + high * 256`, widened to `f64`.
fn combine(low: Option<u8>, high: Option<u8>) -> Option<f64> {
    Some(f64::from(low?) + f64::from(high?) * 256.0)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn full_cycle() -> RawMeasurement {
        RawMeasurement {
            humidity_low: Some(0x20),
            humidity_high: Some(0x0C),
            temperature_low: Some(0x00),
            temperature_high: Some(0x0B),
            value3_low: Some(0x34),
            value3_high: Some(0x12),
            value4_low: Some(0x90),
            value4_high: Some(0x01),
            status: Some(STATUS_OK),
        }
    }

    #[test]
    fn test_capability_bits() {
        assert_eq!(CapabilitySet::from_bits(0x00), CapabilitySet::NONE);
        assert_eq!(
            CapabilitySet::from_bits(0x03),
            CapabilitySet { humidity: true, temperature: true, air_velocity: false, co2: false }
        );
        assert_eq!(
            CapabilitySet::from_bits(0x0C),
            CapabilitySet { humidity: false, temperature: false, air_velocity: true, co2: true }
        );
        // Upper bits are ignored
        assert_eq!(CapabilitySet::from_bits(0xF1).bits(), 0x01);
        assert_eq!(CapabilitySet::from_bits(0x0F).bits(), 0x0F);
        assert_eq!(CapabilitySet::default(), CapabilitySet::NONE);
    }

    #[test]
    fn test_decode_end_to_end_values() {
        let values = full_cycle().decode();
        assert!((values.humidity - 31.04).abs() < 1e-9);
        assert!((values.temperature - (-244.99)).abs() < 1e-9);
        assert_eq!(values.value3, 4660.0);
        assert_eq!(values.value4, 400.0);
    }

    #[test]
    fn test_decode_plausible_temperature() {
        // 29815 centikelvin = 0x7477
        let raw = RawMeasurement {
            temperature_low: Some(0x77),
            temperature_high: Some(0x74),
            status: Some(STATUS_OK),
            ..Default::default()
        };
        let values = raw.decode();
        assert!((values.temperature - 25.0).abs() < 1e-9);
        assert!(values.humidity.is_nan());
        assert_eq!(values.temperature(), Some(values.temperature));
        assert_eq!(values.humidity(), None);
    }

    #[test]
    fn test_nonzero_status_invalidates_cycle() {
        let mut raw = full_cycle();
        raw.status = Some(0x01);
        assert!(raw.decode().is_unavailable());
    }

    #[test]
    fn test_missing_status_invalidates_cycle() {
        let mut raw = full_cycle();
        raw.status = None;
        assert!(raw.decode().is_unavailable());
    }

    #[test]
    fn test_missing_byte_only_affects_its_channel() {
        let mut raw = full_cycle();
        raw.humidity_high = None;
        let values = raw.decode();
        assert!(values.humidity.is_nan());
        assert!((values.temperature - (-244.99)).abs() < 1e-9);
        assert_eq!(values.value3, 4660.0);
        assert_eq!(values.value4, 400.0);

        let mut raw = full_cycle();
        raw.value4_low = None;
        let values = raw.decode();
        assert!(values.value4.is_nan());
        assert!((values.humidity - 31.04).abs() < 1e-9);
    }

    #[test]
    fn test_unavailable_default() {
        assert!(MeasurementValues::default().is_unavailable());
        assert!(RawMeasurement::default().decode().is_unavailable());
    }
}
