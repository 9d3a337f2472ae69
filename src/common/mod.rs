// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod checksum;
pub mod command;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod identity;
pub mod register;
pub mod response;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From checksum.rs
pub use checksum::sum_checksum;

// From command.rs
pub use command::{CommandFrame, COMMAND_LENGTH, PROTOCOL_MARKER};

// From error.rs
pub use error::{E2Error, FrameError};

// From frame.rs
pub use frame::SerialSettings;

// From hal_traits.rs
pub use hal_traits::{E2Instant, E2Serial, E2Timer};

// From identity.rs
pub use identity::{
    decode_type_designation, unknown_type_designation, TypeDesignation, MANUFACTURER, PLACEHOLDER,
};

// From register.rs
pub use register::Register;

// From response.rs
pub use response::{is_valid_response, ResponseFrame, RESPONSE_LEN};

// From types.rs
pub use types::{CapabilitySet, MeasurementValues, RawMeasurement};
