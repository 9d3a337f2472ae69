// src/master/sync_master/mod.rs

use crate::common::{
    hal_traits::{E2Serial, E2Timer},
    identity::MANUFACTURER,
    types::CapabilitySet,
};
use crate::config::MasterConfig;
use core::time::Duration;

mod identify;
mod io_helpers;
mod measurement;
mod transaction;

#[cfg(test)]
mod mock;

pub use identify::InstrumentId;

/// Represents an E2 bus master talking to a single sensor module, SYNCHRONOUSLY.
///
/// The master exclusively owns its interface. Every bus operation takes
/// `&mut self`, so two exchanges can never overlap on one instance.
#[derive(Debug)]
pub struct SyncMaster<IF>
where
    IF: E2Serial + E2Timer,
{
    interface: IF,
    config: MasterConfig,
    /// Last successfully probed capability bitmask, used by gated channel policies.
    capabilities: Option<CapabilitySet>,
}

impl<IF> SyncMaster<IF>
where
    IF: E2Serial + E2Timer,
{
    /// Creates a master with the default configuration.
    ///
    /// The port is not touched until the first query.
    pub fn new(interface: IF) -> Self {
        Self::with_config(interface, MasterConfig::default())
    }

    pub fn with_config(interface: IF, config: MasterConfig) -> Self {
        SyncMaster {
            interface,
            config,
            capabilities: None,
        }
    }

    pub fn config(&self) -> &MasterConfig {
        &self.config
    }

    /// Wait between sending a command and reading the response.
    pub fn response_delay(&self) -> Duration {
        self.config.response_delay
    }

    /// Adjusts the response settle delay for subsequent queries.
    ///
    /// Kept at microsecond resolution.
    pub fn set_response_delay(&mut self, delay: Duration) {
        self.config.response_delay = delay;
    }

    /// Identifier of the port this master talks through.
    pub fn port_name(&self) -> &str {
        self.interface.port_name()
    }

    pub fn manufacturer(&self) -> &'static str {
        MANUFACTURER
    }

    /// Closes the port if it is open, then waits the close settle time.
    ///
    /// Failures are logged and otherwise ignored; the next query reopens the port.
    pub fn close(&mut self) {
        if !self.interface.is_open() {
            return;
        }
        match self.interface.close() {
            Ok(()) => {
                log::debug!("Closed E2 port {}", self.interface.port_name());
                self.delay_for(self.config.port_close_delay);
            }
            Err(e) => log::warn!(
                "Failed to close E2 port {}: {:?}",
                self.interface.port_name(),
                e
            ),
        }
    }

    /// Closes the port and hands the interface back.
    pub fn release(mut self) -> IF {
        self.close();
        self.interface
    }
}
