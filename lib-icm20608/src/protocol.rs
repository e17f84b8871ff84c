//! Register protocol layer: addressing convention plus chip-select framing.
//!
//! Every transaction is delimited by driving chip-select low before and high after it. The line
//! is driven high again on every exit path, including transport failures, so a failed transfer
//! never leaves the bus selected.

use crate::interface::{Direction, Level, OutputLine, Transport};
use crate::registers::{read_address, write_address};
use crate::{BusConfig, Error};

pub struct RegisterBus<T, L>
{
    transport: T,
    cs: L,
}

impl<T: Transport, L: OutputLine> RegisterBus<T, L>
{
    pub fn new(transport: T, cs: L) -> Self {
        RegisterBus { transport, cs }
    }

    /// Opens the transport, then exports the chip-select line and configures it as an output at
    /// the inactive (high) level. Stops at the first failure.
    ///
    pub fn open(&mut self, config: &BusConfig) -> Result<(), Error<T::Error, L::Error>> {
        self.transport.open(config).map_err(Error::Open)?;
        self.cs.export().map_err(Error::Line)?;
        self.cs.set_direction(Direction::Out).map_err(Error::Line)?;
        self.cs.set_value(Level::High).map_err(Error::Line)?;
        Ok(())
    }

    /// Releases the bus handle. The chip-select line is left as it is.
    ///
    pub fn close(&mut self) -> Result<(), Error<T::Error, L::Error>> {
        self.transport.close().map_err(Error::Close)
    }

    /// Runs `op` as one framed transaction.
    ///
    /// If the transport fails and releasing chip-select fails as well, the transport error is
    /// returned.
    ///
    pub fn transaction<R, F>(&mut self, op: F) -> Result<R, Error<T::Error, L::Error>>
    where
        F: FnOnce(&mut T) -> Result<R, T::Error>,
    {
        if let Err(err) = self.cs.set_value(Level::Low) {
            // The line may have moved anyway, try to leave it inactive.
            if let Err(line_err) = self.cs.set_value(Level::High) {
                log::warn!("Failed to release chip-select after failed select: {:?}", line_err);
            }
            return Err(Error::Line(err));
        }

        let result = op(&mut self.transport);
        let released = self.cs.set_value(Level::High);

        match (result, released) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => Err(Error::Line(err)),
            (Err(err), Ok(())) => Err(Error::Transaction(err)),
            (Err(err), Err(line_err)) => {
                log::warn!("Failed to release chip-select after bus error: {:?}", line_err);
                Err(Error::Transaction(err))
            }
        }
    }

    pub fn read_register(&mut self, register: u8) -> Result<u8, Error<T::Error, L::Error>> {
        log::trace!("read 0x{:02X}", register);
        self.transaction(|bus| bus.read_byte(read_address(register)))
    }

    /// Reads `buf.len()` registers starting at `register`.
    ///
    pub fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Error<T::Error, L::Error>> {
        log::trace!("read 0x{:02X} ({} bytes)", register, buf.len());
        self.transaction(|bus| bus.read_bytes(read_address(register), buf))
    }

    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<T::Error, L::Error>> {
        log::trace!("write 0x{:02X} = 0x{:02X}", register, value);
        self.transaction(|bus| bus.write_byte(write_address(register), value))
    }

    /// Gives back the transport and chip-select line.
    ///
    pub fn release(self) -> (T, L) {
        (self.transport, self.cs)
    }
}
