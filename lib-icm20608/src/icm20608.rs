use embedded_hal::delay::DelayNs;

use crate::interface::{OutputLine, Transport};
use crate::protocol::RegisterBus;
use crate::registers::*;
use crate::utils::*;
use crate::{AccelScaleRange, BusConfig, Config, GyroScaleRange, Error, SensorData, Vector, ACCEL_READ_SETTLE_MS, CLOCK_SETTLE_MS, RESET_SETTLE_MS};

/// One register write of the initialization sequence.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep
{
    pub name: &'static str,
    pub register: u8,
    pub value: u8,
    /// Time to wait after the write before touching the device again.
    pub settle_ms: u32,
}

impl InitStep {
    const fn new(name: &'static str, register: u8, value: u8, settle_ms: u32) -> Self {
        InitStep { name, register, value, settle_ms }
    }
}

/// Register writes that bring the device from an unknown state into `config`, in the order the
/// datasheet requires them.
///
pub fn init_sequence(config: &Config) -> [InitStep; 10] {
    [
        InitStep::new("device reset", PWR_MGMT_1, PWR_MGMT_1_DEVICE_RESET, RESET_SETTLE_MS),
        InitStep::new("clock source", PWR_MGMT_1, config.clock_source.as_register(), CLOCK_SETTLE_MS),
        InitStep::new("sample rate divider", SMPLRT_DIV, config.sample_rate_divider, 0),
        InitStep::new("gyro scale", GYRO_CONFIG, config.gyro_scale.as_register(), 0),
        InitStep::new("accel scale", ACCEL_CONFIG, config.accel_scale.as_register(), 0),
        InitStep::new("gyro dlpf", CONFIG, config.dlpf_mode.as_register(), 0),
        InitStep::new("accel dlpf", ACCEL_CONFIG2, config.accel_dlpf_mode.as_register(), 0),
        InitStep::new("enable axes", PWR_MGMT_2, PWR_MGMT_2_ALL_AXES_ON, 0),
        InitStep::new("low power off", LP_MODE_CFG, LP_MODE_CFG_OFF, 0),
        InitStep::new("fifo off", FIFO_EN, FIFO_EN_NONE, 0),
    ]
}

/// An open ICM-20608 session.
///
/// Created by [`Icm20608::init`], which opens the bus and configures the sensor, and torn down
/// by [`Icm20608::close`].
///
pub struct Icm20608<T, L, D>
{
    bus: RegisterBus<T, L>,

    /// Used for the settling delays.
    delay: D,

    /// Configuration the device was programmed with, conversions use its sensitivities.
    config: Config,
}

impl<T: Transport, L: OutputLine, D: DelayNs> Icm20608<T, L, D>
{
    /// Opens the bus and programs the default [`Config`].
    ///
    pub fn init(transport: T, cs: L, delay: D) -> Result<Self, Error<T::Error, L::Error>> {
        Self::init_with_config(transport, cs, delay, &BusConfig::default(), Config::default())
    }

    /// Opens the bus with `bus_config` and runs the initialization sequence for `config`.
    ///
    /// The sequence stops at the first failing step and nothing is rolled back, so the device may
    /// be left partially configured. An error here means the session must not be used.
    ///
    pub fn init_with_config(
        transport: T,
        cs: L,
        delay: D,
        bus_config: &BusConfig,
        config: Config,
    ) -> Result<Self, Error<T::Error, L::Error>> {
        log::info!("Configuring ICM20608");
        let mut bus = RegisterBus::new(transport, cs);
        bus.open(bus_config)?;

        let mut device = Icm20608 { bus, delay, config };
        for step in init_sequence(&config).iter() {
            log::debug!("{}: 0x{:02X} <- 0x{:02X}", step.name, step.register, step.value);
            device.bus.write_register(step.register, step.value)?;
            if step.settle_ms > 0 {
                device.delay.delay_ms(step.settle_ms);
            }
        }

        log::info!("ICM20608 ready");
        Ok(device)
    }

    /// Releases the bus handle and hands the collaborators back.
    ///
    pub fn close(mut self) -> Result<(T, L, D), Error<T::Error, L::Error>> {
        self.bus.close()?;
        let (transport, cs) = self.bus.release();
        Ok((transport, cs, self.delay))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads the `WHO_AM_I` register. The value is not checked, compare it against
    /// [`crate::ICM20608G_DEVICE_ID`] or [`crate::ICM20608D_DEVICE_ID`] if needed.
    ///
    pub fn read_id(&mut self) -> Result<u8, Error<T::Error, L::Error>> {
        self.bus.read_register(WHO_AM_I)
    }

    /// Get the current accelerometer sensor values (in g).
    ///
    pub fn read_accel(&mut self) -> Result<Vector, Error<T::Error, L::Error>> {
        let mut data = [0u8; 6];
        self.read_settled(ACCEL_XOUT_H, &mut data)?;
        let scale = self.config.accel_sensitivity();
        Ok(axes_to_vector(&data, |raw| accel_from_raw(raw, scale)))
    }

    /// Get temperature of the on chip temperature sensor, result is returned in degrees celsius.
    ///
    pub fn read_temp(&mut self) -> Result<f32, Error<T::Error, L::Error>> {
        let mut data = [0u8; 2];
        self.bus.read_registers(TEMP_OUT_H, &mut data)?;
        Ok(temp_from_raw(reg_to_f32(data[0], data[1])))
    }

    /// Get the current gyroscope sensor values (in deg/s).
    ///
    pub fn read_gyro(&mut self) -> Result<Vector, Error<T::Error, L::Error>> {
        let mut data = [0u8; 6];
        self.bus.read_registers(GYRO_XOUT_H, &mut data)?;
        let scale = self.config.gyro_sensitivity();
        Ok(axes_to_vector(&data, |raw| gyro_from_raw(raw, scale)))
    }

    /// Gets acceleration, temperature and angular rate from a single burst over the output
    /// registers, which keeps the three quantities from the same sample.
    ///
    pub fn read_all(&mut self) -> Result<SensorData, Error<T::Error, L::Error>> {
        let mut data = [0u8; 6+2+6];
        self.read_settled(ACCEL_XOUT_H, &mut data)?;

        // First 6 bytes are accelerometer registers, then temperature, then gyroscope.
        let mut accel = [0u8; 6];
        let mut gyro = [0u8; 6];
        accel.copy_from_slice(&data[0..6]);
        gyro.copy_from_slice(&data[8..14]);

        let accel_scale = self.config.accel_sensitivity();
        let gyro_scale = self.config.gyro_sensitivity();
        Ok(SensorData {
            accel: axes_to_vector(&accel, |raw| accel_from_raw(raw, accel_scale)),
            gyro: axes_to_vector(&gyro, |raw| gyro_from_raw(raw, gyro_scale)),
            temp: temp_from_raw(reg_to_f32(data[6], data[7])),
        })
    }

    pub fn get_register_value(&mut self, register: u8) -> Result<u8, Error<T::Error, L::Error>> {
        self.bus.read_register(register)
    }

    /// Writes a raw register value. Writes to the range registers also update the stored
    /// [`Config`], so later reads keep scaling with the range the device is actually in.
    ///
    pub fn set_register_value(&mut self, register: u8, value: u8) -> Result<(), Error<T::Error, L::Error>> {
        self.bus.write_register(register, value)?;
        match register {
            ACCEL_CONFIG => self.config.accel_scale = AccelScaleRange::from_register(value),
            GYRO_CONFIG => self.config.gyro_scale = GyroScaleRange::from_register(value),
            _ => {}
        }
        Ok(())
    }

    pub fn set_accel_scale(&mut self, scale: AccelScaleRange) -> Result<(), Error<T::Error, L::Error>> {
        self.bus.write_register(ACCEL_CONFIG, scale.as_register())?;
        self.config.accel_scale = scale;
        Ok(())
    }

    pub fn set_gyro_scale(&mut self, scale: GyroScaleRange) -> Result<(), Error<T::Error, L::Error>> {
        self.bus.write_register(GYRO_CONFIG, scale.as_register())?;
        self.config.gyro_scale = scale;
        Ok(())
    }

    /// Burst read that waits [`ACCEL_READ_SETTLE_MS`] between selecting the device and clocking
    /// out the accelerometer registers.
    fn read_settled(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Error<T::Error, L::Error>> {
        log::trace!("read 0x{:02X} ({} bytes, settled)", register, buf.len());
        let delay = &mut self.delay;
        self.bus.transaction(|bus| {
            delay.delay_ms(ACCEL_READ_SETTLE_MS);
            bus.read_bytes(read_address(register), buf)
        })
    }
}
