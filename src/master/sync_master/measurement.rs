// src/master/sync_master/measurement.rs

use super::SyncMaster;
use crate::common::{
    hal_traits::{E2Serial, E2Timer},
    register::Register,
    types::{CapabilitySet, MeasurementValues, RawMeasurement, STATUS_OK},
};
use crate::config::ChannelPolicy;

/// Which channels one cycle asks for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct ChannelPlan {
    humidity: bool,
    temperature: bool,
    value3: bool,
    value4: bool,
}

impl ChannelPlan {
    fn new(policy: ChannelPolicy, capabilities: CapabilitySet) -> Self {
        match policy {
            ChannelPolicy::All => ChannelPlan {
                humidity: true,
                temperature: true,
                value3: true,
                value4: true,
            },
            ChannelPolicy::HumidityTemperature => ChannelPlan {
                humidity: true,
                temperature: true,
                value3: capabilities.air_velocity,
                value4: capabilities.co2,
            },
            ChannelPolicy::Probed => ChannelPlan {
                humidity: capabilities.humidity,
                temperature: capabilities.temperature,
                value3: capabilities.air_velocity,
                value4: capabilities.co2,
            },
        }
    }
}

impl<IF> SyncMaster<IF>
where
    IF: E2Serial + E2Timer,
{
    /// Reads the capability bitmask and caches it for the gated channel policies.
    ///
    /// If the register cannot be read, nothing is assumed present and the cache
    /// is cleared so the next gated sample probes again.
    pub fn probe(&mut self) -> CapabilitySet {
        match self.query(Register::AvailableMeasurements) {
            Some(bits) => {
                let capabilities = CapabilitySet::from_bits(bits);
                log::debug!("E2 capabilities {:#04x}: {:?}", bits, capabilities);
                self.capabilities = Some(capabilities);
                capabilities
            }
            None => {
                log::warn!(
                    "Could not read capabilities from {}, assuming no channels",
                    self.interface.port_name()
                );
                self.capabilities = None;
                CapabilitySet::NONE
            }
        }
    }

    /// The last successfully probed capabilities, if any.
    pub fn capabilities(&self) -> Option<CapabilitySet> {
        self.capabilities
    }

    /// Runs one measurement cycle.
    ///
    /// Queries the channels selected by the channel policy, then the status
    /// register last. A status other than `0x00`, or no status at all, makes
    /// every channel unavailable for this cycle.
    pub fn sample(&mut self) -> MeasurementValues {
        let capabilities = if self.config.channel_policy.needs_probe() {
            match self.capabilities {
                Some(capabilities) => capabilities,
                None => self.probe(),
            }
        } else {
            CapabilitySet::NONE
        };
        let plan = ChannelPlan::new(self.config.channel_policy, capabilities);

        let raw = self.collect_raw(plan);
        if raw.status != Some(STATUS_OK) {
            match raw.status {
                Some(status) => log::warn!("E2 status {:#04x}, discarding cycle", status),
                None => log::warn!("E2 status unreadable, discarding cycle"),
            }
        }

        let values = raw.decode();
        log::debug!("E2 sample: {}", values);
        values
    }

    fn collect_raw(&mut self, plan: ChannelPlan) -> RawMeasurement {
        let mut raw = RawMeasurement::default();
        if plan.humidity {
            raw.humidity_low = self.query(Register::HumidityLow);
            raw.humidity_high = self.query(Register::HumidityHigh);
        }
        if plan.temperature {
            raw.temperature_low = self.query(Register::TemperatureLow);
            raw.temperature_high = self.query(Register::TemperatureHigh);
        }
        if plan.value3 {
            raw.value3_low = self.query(Register::Value3Low);
            raw.value3_high = self.query(Register::Value3High);
        }
        if plan.value4 {
            raw.value4_low = self.query(Register::Value4Low);
            raw.value4_high = self.query(Register::Value4High);
        }
        raw.status = self.query(Register::Status);
        raw
    }
}
