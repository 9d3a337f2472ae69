// src/config.rs

use core::time::Duration;

use crate::common::timing;

/// Decides which measurement channels are queried in a sampling cycle.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum ChannelPolicy {
    /// Query all four channels unconditionally. No capability probe is issued.
    #[default]
    All,
    /// Query humidity and temperature unconditionally. Channels 3 and 4 are
    /// queried only if the capability probe reports air velocity or CO2.
    HumidityTemperature,
    /// Query each channel only if the capability probe reports it.
    Probed,
}

impl ChannelPolicy {
    /// Whether this policy needs the capability bitmask before sampling.
    pub fn needs_probe(&self) -> bool {
        !matches!(self, ChannelPolicy::All)
    }
}

/// Configuration settings for an E2 master.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MasterConfig {
    /// Wait between sending a command and reading the response.
    pub response_delay: Duration,
    /// Settle time after the port is opened.
    pub port_open_delay: Duration,
    /// Settle time after the port is closed.
    pub port_close_delay: Duration,
    /// Which channels a sampling cycle queries.
    pub channel_policy: ChannelPolicy,
}

impl MasterConfig {
    /// Creates a new `MasterConfig` instance.
    ///
    /// # Arguments
    ///
    /// * `response_delay` - Wait between command and response read.
    /// * `channel_policy` - Which channels a sampling cycle queries.
    ///
    /// Port delays take their defaults.
    pub fn new(response_delay: Duration, channel_policy: ChannelPolicy) -> MasterConfig {
        MasterConfig {
            response_delay,
            channel_policy,
            ..MasterConfig::default()
        }
    }

    /// Sets the response settle delay.
    pub fn response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    /// Sets the settle time after opening the port.
    pub fn port_open_delay(mut self, delay: Duration) -> Self {
        self.port_open_delay = delay;
        self
    }

    /// Sets the settle time after closing the port.
    pub fn port_close_delay(mut self, delay: Duration) -> Self {
        self.port_close_delay = delay;
        self
    }

    /// Sets the channel policy.
    pub fn channel_policy(mut self, policy: ChannelPolicy) -> Self {
        self.channel_policy = policy;
        self
    }
}

/// Provides default configuration values for an E2 master.
impl Default for MasterConfig {
    /// Returns the default configuration.
    ///
    /// 400 ms response delay, 100 ms port open/close delays, all channels queried.
    fn default() -> MasterConfig {
        MasterConfig {
            response_delay: timing::RESPONSE_DELAY,
            port_open_delay: timing::PORT_OPEN_DELAY,
            port_close_delay: timing::PORT_CLOSE_DELAY,
            channel_policy: ChannelPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MasterConfig::default();
        assert_eq!(config.response_delay, Duration::from_millis(400));
        assert_eq!(config.port_open_delay, Duration::from_millis(100));
        assert_eq!(config.port_close_delay, Duration::from_millis(100));
        assert_eq!(config.channel_policy, ChannelPolicy::All);
    }

    #[test]
    fn test_builder() {
        let config = MasterConfig::default()
            .response_delay(Duration::from_millis(80))
            .port_open_delay(Duration::ZERO)
            .channel_policy(ChannelPolicy::Probed);
        assert_eq!(config.response_delay, Duration::from_millis(80));
        assert_eq!(config.port_open_delay, Duration::ZERO);
        assert_eq!(config.port_close_delay, Duration::from_millis(100));
        assert_eq!(config.channel_policy, ChannelPolicy::Probed);

        let direct = MasterConfig::new(Duration::from_millis(80), ChannelPolicy::HumidityTemperature);
        assert_eq!(direct.port_open_delay, Duration::from_millis(100));
        assert!(direct.channel_policy.needs_probe());
        assert!(!ChannelPolicy::All.needs_probe());
    }
}
