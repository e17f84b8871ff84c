//! Collaborators the driver talks through: the bus transport and the chip-select output line.
//!
//! Neither trait knows anything about framing. Chip-select handling lives in
//! [`crate::protocol::RegisterBus`].

use core::fmt::Debug;

use crate::BusConfig;

/// Synchronous serial bus addressed by register.
///
/// `address` is the byte put on the bus first and already carries the direction bit.
pub trait Transport {
    type Error: Debug;

    /// Open the bus with the given mode, clock rate and word size.
    fn open(&mut self, config: &BusConfig) -> Result<(), Self::Error>;

    /// Release the bus handle.
    fn close(&mut self) -> Result<(), Self::Error>;

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;

    fn read_byte(&mut self, address: u8) -> Result<u8, Self::Error>;

    /// Read `buf.len()` contiguous bytes starting at `address`.
    fn read_bytes(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Logic level of a digital output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

/// General purpose digital output used as chip-select.
pub trait OutputLine {
    type Error: Debug;

    /// Make the line available to this process.
    fn export(&mut self) -> Result<(), Self::Error>;

    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error>;

    fn set_value(&mut self, level: Level) -> Result<(), Self::Error>;
}
