// src/master/sync_master/transaction.rs

use super::SyncMaster;
use crate::common::{
    command::CommandFrame,
    error::E2Error,
    hal_traits::{E2Serial, E2Timer},
    register::Register,
    response::ResponseFrame,
};

impl<IF> SyncMaster<IF>
where
    IF: E2Serial + E2Timer,
{
    /// Reads one register: send, wait the response delay, read, validate.
    ///
    /// Returns the payload byte, or `None` on any transport or framing failure.
    /// The two are not distinguished here; use [`try_query`](Self::try_query)
    /// for the cause. There is no retry.
    pub fn query(&mut self, register: Register) -> Option<u8> {
        match self.try_query(register) {
            Ok(payload) => Some(payload),
            Err(e) => {
                log::debug!("E2 query {} on {} failed: {}", register, self.interface.port_name(), e);
                None
            }
        }
    }

    /// Like [`query`](Self::query), but reports why the exchange failed.
    pub fn try_query(&mut self, register: Register) -> Result<u8, E2Error<IF::Error>> {
        // 1. Make sure the port is open (settles once on first open)
        self.ensure_open()?;

        // 2. Send the command frame
        let command = CommandFrame::new(register);
        log::debug!("E2 >>> {}", command);
        self.send_command_bytes(command.as_bytes())?;

        // 3. Give the module time to answer
        self.wait_for_response();

        // 4. Take what has arrived and validate it as a whole
        let received = self.read_available()?;
        log::debug!("E2 <<< {:02X?}", received.as_slice());
        let response = ResponseFrame::parse(&received)?;

        Ok(response.payload())
    }
}
