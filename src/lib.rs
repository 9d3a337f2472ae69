// src/lib.rs

#![cfg_attr(not(test), no_std)] // no_std outside of unit tests

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod adapters;
pub mod common;
pub mod config;
pub mod master;

// Re-export key types for convenience
pub use common::{
    CapabilitySet, CommandFrame, E2Error, FrameError, MeasurementValues, Register, ResponseFrame,
};
pub use adapters::Interface;
pub use config::{ChannelPolicy, MasterConfig};
pub use master::{InstrumentId, SyncMaster};
