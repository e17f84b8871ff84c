use std::{process::ExitCode, thread, time::Duration};

use env_logger::Env;
use icm20608::{Icm20608, ICM20608D_DEVICE_ID, ICM20608G_DEVICE_ID};

mod error;
use error::*;

mod linux;
use linux::*;

/// spidev node the sensor is wired to.
const SPI_DEVICE: &str = "/dev/spidev2.0";

/// Chip-select line (GPIO1_IO20).
const CS_PIN: u64 = 20;

const POLL_PERIOD: Duration = Duration::from_secs(1);

type Sensor = Icm20608<SpidevTransport, SysfsLine, StdDelay>;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let mut imu: Sensor = Icm20608::init(SpidevTransport::new(SPI_DEVICE), SysfsLine::new(CS_PIN), StdDelay)?;

    let id = imu.read_id()?;
    println!("icm20608 id: 0x{:02X}", id);
    if id != ICM20608G_DEVICE_ID && id != ICM20608D_DEVICE_ID {
        log::warn!("Unexpected WHO_AM_I value 0x{:02X}, continuing anyway", id);
    }

    loop {
        poll(&mut imu);
        thread::sleep(POLL_PERIOD);
    }
}

/// Reads and prints every quantity once. A failed read only skips that quantity for this round.
///
fn poll(imu: &mut Sensor) {
    match imu.read_accel() {
        Ok(accel) => println!(
            "accel_x = {:.2} (g), accel_y = {:.2} (g), accel_z = {:.2} (g)",
            accel.x, accel.y, accel.z
        ),
        Err(err) => log::warn!("read accel failed: {}", err),
    }

    match imu.read_temp() {
        Ok(temp) => println!("temp = {:.2} (°C)", temp),
        Err(err) => log::warn!("read temp failed: {}", err),
    }

    match imu.read_gyro() {
        Ok(gyro) => println!(
            "gyro_x = {:.2} (°/s), gyro_y = {:.2} (°/s), gyro_z = {:.2} (°/s)",
            gyro.x, gyro.y, gyro.z
        ),
        Err(err) => log::warn!("read gyro failed: {}", err),
    }

    println!();
}
