// src/common/error.rs

/// Reasons a received byte sequence is not a valid E2 success response.
///
/// Checked in this order; the first failing rule is reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// Response did not have exactly six bytes.
    #[error("Length error: expected 6 bytes, got {0}")]
    Length(usize),

    /// First byte was not the protocol marker.
    #[error("Invalid marker byte: {0:#04x}")]
    Marker(u8),

    /// Length field was not the expected response length.
    #[error("Invalid length field: {0:#04x}")]
    LengthField(u8),

    /// Status field was not the acknowledge code (sensor sent a NAK or garbage).
    #[error("NAK or unexpected status field: {0:#04x}")]
    Nak(u8),

    /// Reserved field was not zero.
    #[error("Invalid reserved field: {0:#04x}")]
    Reserved(u8),

    /// Received checksum does not match calculated checksum.
    #[error("Checksum mismatch: received {received:#04x}, calculated {calculated:#04x}")]
    Checksum { received: u8, calculated: u8 },
}

#[derive(Debug, thiserror::Error)]
pub enum E2Error<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic Io error
{
    /// Underlying I/O error from the transport implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// A non-blocking write or flush did not complete in time.
    #[error("Operation timed out")]
    Timeout,

    /// More bytes arrived than any valid response can hold.
    #[error("Receive buffer overflow: more than {capacity} bytes pending")]
    BufferOverflow { capacity: usize },

    /// Response was received but is not a valid success frame.
    #[error("Invalid response frame: {0}")]
    Frame(FrameError),
}

impl<E: core::fmt::Debug> From<FrameError> for E2Error<E> {
    fn from(e: FrameError) -> Self {
        E2Error::Frame(e)
    }
}

impl<E: core::fmt::Debug> E2Error<E> {
    /// True for failures of the physical link rather than of the frame content.
    pub fn is_transport(&self) -> bool {
        !matches!(self, E2Error::Frame(_))
    }
}
