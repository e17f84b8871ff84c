//! Adapters from `embedded-hal` 1.0 peripherals onto [`Transport`] and [`OutputLine`].
//!
//! HAL peripherals are configured when they are constructed, so `open`, `export` and
//! `set_direction` have nothing left to do here.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::interface::{Direction, Level, OutputLine, Transport};
use crate::BusConfig;

/// Register transport over a raw [`SpiBus`]. Chip-select is not touched.
pub struct SpiBusTransport<S> {
    spi: S,
}

impl<S> SpiBusTransport<S> {
    pub fn new(spi: S) -> Self {
        Self { spi }
    }

    pub fn release(self) -> S {
        self.spi
    }
}

impl<S: SpiBus> Transport for SpiBusTransport<S> {
    type Error = S::Error;

    fn open(&mut self, _config: &BusConfig) -> Result<(), S::Error> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), S::Error> {
        self.spi.flush()
    }

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), S::Error> {
        self.spi.write(&[address, value])?;
        self.spi.flush()
    }

    fn read_byte(&mut self, address: u8) -> Result<u8, S::Error> {
        let mut frame = [address, 0];
        self.spi.transfer_in_place(&mut frame)?;
        self.spi.flush()?;
        Ok(frame[1])
    }

    fn read_bytes(&mut self, address: u8, buf: &mut [u8]) -> Result<(), S::Error> {
        if buf.is_empty() {
            return Ok(());
        }
        self.spi.write(&[address])?;
        self.spi.read(buf)?;
        self.spi.flush()
    }
}

/// Chip-select line on top of an [`OutputPin`].
pub struct OutputPinLine<P> {
    pin: P,
}

impl<P> OutputPinLine<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> OutputLine for OutputPinLine<P> {
    type Error = P::Error;

    fn export(&mut self) -> Result<(), P::Error> {
        Ok(())
    }

    fn set_direction(&mut self, _direction: Direction) -> Result<(), P::Error> {
        Ok(())
    }

    fn set_value(&mut self, level: Level) -> Result<(), P::Error> {
        match level {
            Level::Low => self.pin.set_low(),
            Level::High => self.pin.set_high(),
        }
    }
}
