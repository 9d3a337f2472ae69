// src/master/sync_master/identify.rs

use super::SyncMaster;
use crate::common::{
    hal_traits::{E2Serial, E2Timer},
    identity::{decode_type_designation, unknown_type_designation, TypeDesignation, PLACEHOLDER},
    register::Register,
};
use core::fmt;

/// Identification line of an attached instrument.
///
/// Displays as `{type} {firmware} SN:{serial} @ {port}`, e.g.
/// `EE10-1 FT2 ??? SN:??? @ COM3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentId<'a> {
    pub instrument_type: TypeDesignation,
    pub firmware_version: &'static str,
    pub serial_number: &'static str,
    pub port: &'a str,
}

impl fmt::Display for InstrumentId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} SN:{} @ {}",
            self.instrument_type, self.firmware_version, self.serial_number, self.port
        )
    }
}

impl<IF> SyncMaster<IF>
where
    IF: E2Serial + E2Timer,
{
    /// Reads group-low, subgroup and group-high and decodes the type designation.
    ///
    /// Stops at the first register that does not answer and returns `???`.
    /// Nothing is cached; only call this while no measurement is running.
    pub fn identify(&mut self) -> TypeDesignation {
        let Some(group_low) = self.query(Register::GroupLow) else {
            return unknown_type_designation();
        };
        let Some(subgroup) = self.query(Register::Subgroup) else {
            return unknown_type_designation();
        };
        let Some(group_high) = self.query(Register::GroupHigh) else {
            return unknown_type_designation();
        };
        decode_type_designation(group_low, subgroup, group_high)
    }

    /// Not exposed by this protocol variant.
    pub fn serial_number(&self) -> &'static str {
        PLACEHOLDER
    }

    /// Not exposed by this protocol variant.
    pub fn firmware_version(&self) -> &'static str {
        PLACEHOLDER
    }

    /// Queries the module and builds its identification line.
    pub fn instrument_id(&mut self) -> InstrumentId<'_> {
        let instrument_type = self.identify();
        InstrumentId {
            instrument_type,
            firmware_version: self.firmware_version(),
            serial_number: self.serial_number(),
            port: self.interface.port_name(),
        }
    }

    /// Owned form of [`instrument_id`](Self::instrument_id).
    #[cfg(feature = "alloc")]
    pub fn instrument_id_string(&mut self) -> alloc::string::String {
        use alloc::string::ToString;
        self.instrument_id().to_string()
    }
}
