// src/common/checksum.rs

//! E2 frame checksum.
//!
//! Both command and response frames end in a single checksum byte: the sum of
//! every preceding byte, truncated to 8 bits.

/// Calculates the E2 checksum for the given bytes (wrapping 8-bit sum).
///
/// # Arguments
///
/// * `data`: Every frame byte *before* the checksum position.
///
/// # Returns
///
/// The truncated (modulo 256) sum of `data`.
#[inline]
pub fn sum_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Checks a complete frame whose last byte is the checksum.
///
/// Returns `false` for an empty slice, since there is no checksum to compare.
pub fn verify_trailing_checksum(frame: &[u8]) -> bool {
    match frame.split_last() {
        Some((&received, data)) => sum_checksum(data) == received,
        None => false,
    }
}
