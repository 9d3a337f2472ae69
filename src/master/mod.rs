// src/master/mod.rs

pub mod sync_master;

// Re-export the public SyncMaster struct and its identification view
pub use sync_master::{InstrumentId, SyncMaster};
