// src/common/response.rs

//! Validation of E2 read responses.
//!
//! A successful read is answered with exactly six bytes:
//! `[B] [L] [S] [F] [D] [C]` = marker, length, status, reserved, payload, checksum.

use super::{
    checksum::{sum_checksum, verify_trailing_checksum},
    command::PROTOCOL_MARKER,
    error::FrameError,
};

/// Size of a success response in bytes.
pub const RESPONSE_LEN: usize = 6;

/// Length field of a success response.
pub const RESPONSE_LENGTH_FIELD: u8 = 0x03;

/// Status field meaning "command acknowledged".
pub const STATUS_ACK: u8 = 0x06;

/// Reserved field, always zero.
pub const RESERVED: u8 = 0x00;

/// A validated success response.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResponseFrame([u8; RESPONSE_LEN]);

impl ResponseFrame {
    /// Validates `bytes` as a success response.
    ///
    /// Rules are checked in order and the first violation is returned:
    /// length, marker, length field, status, reserved field, checksum.
    /// There is no partial acceptance.
    pub fn parse(bytes: &[u8]) -> Result<Self, FrameError> {
        let frame: [u8; RESPONSE_LEN] = bytes
            .try_into()
            .map_err(|_| FrameError::Length(bytes.len()))?;

        if frame[0] != PROTOCOL_MARKER {
            return Err(FrameError::Marker(frame[0]));
        }
        if frame[1] != RESPONSE_LENGTH_FIELD {
            return Err(FrameError::LengthField(frame[1]));
        }
        if frame[2] != STATUS_ACK {
            return Err(FrameError::Nak(frame[2]));
        }
        if frame[3] != RESERVED {
            return Err(FrameError::Reserved(frame[3]));
        }
        if !verify_trailing_checksum(&frame) {
            return Err(FrameError::Checksum {
                received: frame[5],
                calculated: sum_checksum(&frame[..5]),
            });
        }

        Ok(ResponseFrame(frame))
    }

    /// Builds the canonical success response carrying `payload`.
    pub fn ideal(payload: u8) -> Self {
        let mut frame = [
            PROTOCOL_MARKER,
            RESPONSE_LENGTH_FIELD,
            STATUS_ACK,
            RESERVED,
            payload,
            0x00,
        ];
        frame[5] = sum_checksum(&frame[..5]);
        ResponseFrame(frame)
    }

    /// The data byte carried by the response.
    #[inline]
    pub const fn payload(&self) -> u8 {
        self.0[4]
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; RESPONSE_LEN] {
        &self.0
    }
}

/// Boolean view of [`ResponseFrame::parse`].
pub fn is_valid_response(bytes: &[u8]) -> bool {
    ResponseFrame::parse(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{command::CommandFrame, register::Register};

    const VALID: [u8; 6] = [0x51, 0x03, 0x06, 0x00, 0x20, 0x7A];

    #[test]
    fn test_valid_frame_yields_payload() {
        let frame = ResponseFrame::parse(&VALID).unwrap();
        assert_eq!(frame.payload(), 0x20);
        assert!(is_valid_response(&VALID));
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        assert_eq!(ResponseFrame::parse(&[]), Err(FrameError::Length(0)));
        assert_eq!(ResponseFrame::parse(&VALID[..5]), Err(FrameError::Length(5)));
        let mut long = [0u8; 7];
        long[..6].copy_from_slice(&VALID);
        assert_eq!(ResponseFrame::parse(&long), Err(FrameError::Length(7)));
    }

    #[test]
    fn test_rules_checked_in_order() {
        let mut frame = VALID;
        frame[0] = 0x50;
        assert_eq!(ResponseFrame::parse(&frame), Err(FrameError::Marker(0x50)));

        let mut frame = VALID;
        frame[1] = 0x02;
        assert_eq!(ResponseFrame::parse(&frame), Err(FrameError::LengthField(0x02)));

        let mut frame = VALID;
        frame[2] = 0x15;
        assert_eq!(ResponseFrame::parse(&frame), Err(FrameError::Nak(0x15)));

        let mut frame = VALID;
        frame[3] = 0x01;
        assert_eq!(ResponseFrame::parse(&frame), Err(FrameError::Reserved(0x01)));

        let mut frame = VALID;
        frame[5] = 0x7B;
        assert_eq!(
            ResponseFrame::parse(&frame),
            Err(FrameError::Checksum { received: 0x7B, calculated: 0x7A })
        );

        // Bad marker and bad checksum together: marker wins
        let mut frame = VALID;
        frame[0] = 0x00;
        frame[5] = 0x00;
        assert_eq!(ResponseFrame::parse(&frame), Err(FrameError::Marker(0x00)));
    }

    #[test]
    fn test_any_single_byte_mutation_invalidates() {
        // Changing one byte of a valid frame always breaks either a fixed field
        // or the checksum, because only one byte moves.
        for index in 0..RESPONSE_LEN {
            for delta in [0x01u8, 0x10, 0x80, 0xFF] {
                let mut frame = VALID;
                frame[index] = frame[index].wrapping_add(delta);
                assert!(
                    !is_valid_response(&frame),
                    "mutation at {} by {:#04x} was accepted",
                    index,
                    delta
                );
            }
        }
    }

    #[test]
    fn test_ideal_response_round_trip() {
        for register in [Register::HumidityLow, Register::Status, Register::GroupHigh] {
            let command = CommandFrame::new(register);
            assert!(verify_trailing_checksum(command.as_bytes()));
            for payload in [0x00u8, 0x0C, 0x55, 0xFF] {
                let ideal = ResponseFrame::ideal(payload);
                let parsed = ResponseFrame::parse(ideal.as_bytes()).unwrap();
                assert_eq!(parsed.payload(), payload);
            }
        }
    }
}
