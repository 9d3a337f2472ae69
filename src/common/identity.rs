// src/common/identity.rs

//! Decoding of the product group registers into a type designation.

use arrayvec::ArrayString;
use core::fmt::Write;

/// Returned for anything that cannot be read or is not exposed by the protocol.
pub const PLACEHOLDER: &str = "???";

/// Manufacturer of every E2 module.
pub const MANUFACTURER: &str = "E+E Elektronik";

/// Group-high values that mean "no high byte".
const GROUP_HIGH_SENTINELS: [u8; 2] = [0x55, 0xFF];

/// Fits the longest designation, `EE65535-15 FT15`.
pub type TypeDesignation = ArrayString<16>;

/// Builds a designation such as `EE10-1 FT2` from the three identification bytes.
///
/// * A group-high of `0x55` or `0xFF` is treated as `0x00`.
/// * Product series below 100 is zero-padded to two digits.
/// * The output type suffix (`-n`) is left out when the high nibble of `subgroup` is zero.
pub fn decode_type_designation(group_low: u8, subgroup: u8, group_high: u8) -> TypeDesignation {
    let group_high = if GROUP_HIGH_SENTINELS.contains(&group_high) {
        0x00
    } else {
        group_high
    };
    let product_series = u16::from(group_high) * 256 + u16::from(group_low);
    let output_type = (subgroup >> 4) & 0x0F;
    let firmware_type = subgroup & 0x0F;

    let mut designation = TypeDesignation::new();
    // Capacity covers the widest possible output, so the writes cannot fail.
    let _ = write!(designation, "EE{:02}", product_series);
    if output_type != 0 {
        let _ = write!(designation, "-{}", output_type);
    }
    let _ = write!(designation, " FT{}", firmware_type);
    designation
}

/// The designation reported when identification fails.
pub fn unknown_type_designation() -> TypeDesignation {
    let mut designation = TypeDesignation::new();
    designation.push_str(PLACEHOLDER);
    designation
}
