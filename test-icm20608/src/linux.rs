//! Linux implementations of the driver collaborators: spidev for the bus, sysfs for the
//! chip-select line and `thread::sleep` for delays.

use std::{io::{self, Write}, path::PathBuf, thread, time::Duration};

use embedded_hal::delay::DelayNs;
use icm20608::{BusConfig, Direction, Level, OutputLine, SpiMode, Transport};
use spidev::{SpiModeFlags, Spidev, SpidevOptions, SpidevTransfer};
use sysfs_gpio::Pin;

/// Register transport on a spidev character device, e.g. `/dev/spidev2.0`.
pub struct SpidevTransport {
    path: PathBuf,
    spi: Option<Spidev>,
}

impl SpidevTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SpidevTransport { path: path.into(), spi: None }
    }

    fn device(&mut self) -> io::Result<&mut Spidev> {
        self.spi.as_mut().ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "spi device is not open"))
    }
}

fn mode_flags(mode: SpiMode) -> SpiModeFlags {
    match mode {
        SpiMode::Mode0 => SpiModeFlags::SPI_MODE_0,
        SpiMode::Mode1 => SpiModeFlags::SPI_MODE_1,
        SpiMode::Mode2 => SpiModeFlags::SPI_MODE_2,
        SpiMode::Mode3 => SpiModeFlags::SPI_MODE_3,
    }
}

/// Transmit buffer of a burst read: the address byte followed by `len` dummy bytes. The data
/// comes back in the same positions, one byte behind the address.
fn read_frame(address: u8, len: usize) -> Vec<u8> {
    let mut tx = vec![0u8; len + 1];
    tx[0] = address;
    tx
}

impl Transport for SpidevTransport {
    type Error = io::Error;

    fn open(&mut self, config: &BusConfig) -> io::Result<()> {
        let mut spi = Spidev::open(&self.path)?;
        let options = SpidevOptions::new()
            .bits_per_word(config.word_bits)
            .max_speed_hz(config.clock_hz)
            .mode(mode_flags(config.mode))
            .build();
        spi.configure(&options)?;
        log::debug!("Opened {} at {} Hz", self.path.display(), config.clock_hz);
        self.spi = Some(spi);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        match self.spi.take() {
            Some(_) => Ok(()),
            None => Err(io::Error::new(io::ErrorKind::NotConnected, "spi device is not open")),
        }
    }

    fn write_byte(&mut self, address: u8, value: u8) -> io::Result<()> {
        self.device()?.write_all(&[address, value])
    }

    fn read_byte(&mut self, address: u8) -> io::Result<u8> {
        let mut value = [0u8];
        self.read_bytes(address, &mut value)?;
        Ok(value[0])
    }

    fn read_bytes(&mut self, address: u8, buf: &mut [u8]) -> io::Result<()> {
        // Full duplex: the address goes out first, the data comes back behind it.
        let tx = read_frame(address, buf.len());
        let mut rx = vec![0u8; tx.len()];
        {
            let mut transfer = SpidevTransfer::read_write(&tx, &mut rx);
            self.device()?.transfer(&mut transfer)?;
        }
        buf.copy_from_slice(&rx[1..]);
        Ok(())
    }
}

/// Chip-select on a sysfs GPIO line.
pub struct SysfsLine {
    pin: Pin,
}

impl SysfsLine {
    pub fn new(number: u64) -> Self {
        SysfsLine { pin: Pin::new(number) }
    }
}

impl OutputLine for SysfsLine {
    type Error = sysfs_gpio::Error;

    fn export(&mut self) -> Result<(), sysfs_gpio::Error> {
        self.pin.export()
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), sysfs_gpio::Error> {
        self.pin.set_direction(match direction {
            Direction::In => sysfs_gpio::Direction::In,
            Direction::Out => sysfs_gpio::Direction::Out,
        })
    }

    fn set_value(&mut self, level: Level) -> Result<(), sysfs_gpio::Error> {
        self.pin.set_value(match level {
            Level::Low => 0,
            Level::High => 1,
        })
    }
}

/// Blocking delay on the calling thread.
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms as u64));
    }
}
