//! Sensor and bus configuration.
//!
//! The full scale ranges in [`Config`] are the single source for both the bits written during
//! initialization and the sensitivities used to convert samples, so the two can not disagree.

use crate::{AccelDLPFMode, AccelScaleRange, ClockSource, DLPFMode, GyroScaleRange};

/// Wait after the `PWR_MGMT_1` device reset before the next register access.
pub const RESET_SETTLE_MS: u32 = 50;

/// Wait after selecting the clock source so the PLL can lock.
pub const CLOCK_SETTLE_MS: u32 = 50;

/// Wait between asserting chip-select and reading the accelerometer output registers.
pub const ACCEL_READ_SETTLE_MS: u32 = 50;

/// SPI clock polarity/phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiMode {
    /// CPOL=0, CPHA=0
    Mode0,
    /// CPOL=0, CPHA=1
    Mode1,
    /// CPOL=1, CPHA=0
    Mode2,
    /// CPOL=1, CPHA=1
    Mode3,
}

/// Parameters the bus transport is opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    pub mode: SpiMode,
    pub clock_hz: u32,
    pub word_bits: u8,
}

impl BusConfig {
    /// Mode 0, 8 MHz, 8 bit words.
    pub const fn new() -> Self {
        BusConfig {
            mode: SpiMode::Mode0,
            clock_hz: 8_000_000,
            word_bits: 8,
        }
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Operating configuration programmed by [`crate::Icm20608::init_with_config`].
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub clock_source: ClockSource,
    pub sample_rate_divider: u8,
    pub gyro_scale: GyroScaleRange,
    pub accel_scale: AccelScaleRange,
    pub dlpf_mode: DLPFMode,
    pub accel_dlpf_mode: AccelDLPFMode,
}

impl Config {
    /// Fastest sample rate, +/-2000 deg/s, +/-16 g, 20 Hz gyroscope and 21.2 Hz accelerometer
    /// low pass filters.
    /// 
    pub const fn new() -> Self {
        Config {
            clock_source: ClockSource::Auto,
            sample_rate_divider: 0,
            gyro_scale: GyroScaleRange::D2000,
            accel_scale: AccelScaleRange::G16,
            dlpf_mode: DLPFMode::Bw20Hz,
            accel_dlpf_mode: AccelDLPFMode::Bw21Hz,
        }
    }

    /// LSB per g for the configured accelerometer range.
    pub const fn accel_sensitivity(&self) -> f32 {
        self.accel_scale.as_scale_factor()
    }

    /// LSB per deg/s for the configured gyroscope range.
    pub const fn gyro_sensitivity(&self) -> f32 {
        self.gyro_scale.as_scale_factor()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
