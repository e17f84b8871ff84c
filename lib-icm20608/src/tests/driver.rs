use crate::interface::Level;
use crate::registers::*;
use crate::*;

use super::mock::{self, assert_framed, Event, MockDelay, MockError, MockLine, MockTransport, Shared};

type Device = Icm20608<MockTransport, MockLine, MockDelay>;

fn init_device() -> (Shared, Device) {
    let (bench, transport, line, delay) = mock::bench();
    let device = Icm20608::init(transport, line, delay).unwrap();
    bench.borrow_mut().clear();
    (bench, device)
}

fn set_registers(bench: &Shared, start: u8, values: &[u8]) {
    let start = start as usize;
    bench.borrow_mut().registers[start..start + values.len()].copy_from_slice(values);
}

#[test]
fn init_runs_datasheet_sequence_in_order() {
    let (bench, transport, line, delay) = mock::bench();
    Icm20608::init(transport, line, delay).unwrap();

    let write = |register: u8, value: u8| vec![
        Event::SetValue(Level::Low),
        Event::WriteByte(register, value),
        Event::SetValue(Level::High),
    ];

    let mut expected = vec![
        Event::Open(BusConfig::default()),
        Event::Export,
        Event::SetDirection(Direction::Out),
        Event::SetValue(Level::High),
    ];
    expected.extend(write(0x6B, 0x80));
    expected.push(Event::DelayMs(50));
    expected.extend(write(0x6B, 0x01));
    expected.push(Event::DelayMs(50));
    expected.extend(write(0x19, 0x00));
    expected.extend(write(0x1B, 0x18));
    expected.extend(write(0x1C, 0x18));
    expected.extend(write(0x1A, 0x04));
    expected.extend(write(0x1D, 0x04));
    expected.extend(write(0x6C, 0x00));
    expected.extend(write(0x1E, 0x00));
    expected.extend(write(0x23, 0x00));

    assert_eq!(bench.borrow().events, expected);
}

#[test]
fn init_stops_at_first_failing_step() {
    let steps = init_sequence(&Config::default()).len();
    for failing in 0..steps {
        let (bench, transport, line, delay) = mock::bench();
        bench.borrow_mut().fail_transfer = Some(failing);

        let err = Icm20608::init(transport, line, delay).err().unwrap();

        assert!(matches!(err, Error::Transaction(MockError)), "step {}", failing);
        let bench = bench.borrow();
        assert_eq!(bench.write_count(), failing + 1, "step {}", failing);
        assert_eq!(bench.events.last(), Some(&Event::SetValue(Level::High)));
        assert_framed(&bench.events);
    }
}

#[test]
fn no_settle_delay_after_failed_reset() {
    let (bench, transport, line, delay) = mock::bench();
    bench.borrow_mut().fail_transfer = Some(0);

    assert!(Icm20608::init(transport, line, delay).is_err());
    assert!(!bench.borrow().events.contains(&Event::DelayMs(RESET_SETTLE_MS)));
}

#[test]
fn init_fails_when_bus_does_not_open() {
    let (bench, transport, line, delay) = mock::bench();
    bench.borrow_mut().fail_open = true;

    let err = Icm20608::init(transport, line, delay).err().unwrap();

    assert!(matches!(err, Error::Open(MockError)));
    assert!(!err.is_transient());
    assert_eq!(bench.borrow().events, vec![Event::Open(BusConfig::default())]);
}

#[test]
fn init_fails_when_chip_select_cannot_be_exported() {
    let (bench, transport, line, delay) = mock::bench();
    bench.borrow_mut().fail_export = true;

    let err = Icm20608::init(transport, line, delay).err().unwrap();

    assert!(matches!(err, Error::Line(MockError)));
    assert_eq!(bench.borrow().transfers, 0);
}

#[test]
fn init_with_config_programs_matching_ranges() {
    let (bench, transport, line, delay) = mock::bench();
    let config = Config {
        accel_scale: AccelScaleRange::G8,
        gyro_scale: GyroScaleRange::D250,
        ..Config::default()
    };
    let mut device = Icm20608::init_with_config(transport, line, delay, &BusConfig::default(), config).unwrap();

    assert!(bench.borrow().events.contains(&Event::WriteByte(ACCEL_CONFIG, 0x10)));
    assert!(bench.borrow().events.contains(&Event::WriteByte(GYRO_CONFIG, 0x00)));

    // 4096 LSB/g at +/-8 g, 131 LSB/(deg/s) at +/-250 deg/s.
    set_registers(&bench, ACCEL_XOUT_H, &[0x10, 0x00, 0xF0, 0x00, 0x00, 0x00]);
    set_registers(&bench, GYRO_XOUT_H, &[0x00, 0x83, 0x00, 0x00, 0xFF, 0x7D]);
    let accel = device.read_accel().unwrap();
    let gyro = device.read_gyro().unwrap();
    assert!(accel.approx_eq(&Vector::new(1.0, -1.0, 0.0), 1e-6), "{:?}", accel);
    assert!(gyro.approx_eq(&Vector::new(1.0, 0.0, -1.0), 1e-6), "{:?}", gyro);
}

#[test]
fn reports_identity_and_acceleration() {
    let (bench, mut device) = init_device();
    bench.borrow_mut().registers[WHO_AM_I as usize] = 0xAF;
    set_registers(&bench, ACCEL_XOUT_H, &[0x08, 0x00, 0x00, 0x00, 0xFC, 0x00]);

    assert_eq!(device.read_id().unwrap(), ICM20608G_DEVICE_ID);
    let accel = device.read_accel().unwrap();
    assert!(accel.approx_eq(&Vector::new(1.0, 0.0, -0.5), 1e-6), "{:?}", accel);
}

#[test]
fn identity_is_not_validated() {
    let (bench, mut device) = init_device();
    bench.borrow_mut().registers[WHO_AM_I as usize] = 0x12;

    assert_eq!(device.read_id().unwrap(), 0x12);
}

#[test]
fn accel_read_waits_after_chip_select() {
    let (bench, mut device) = init_device();

    device.read_accel().unwrap();

    assert_eq!(bench.borrow().events, vec![
        Event::SetValue(Level::Low),
        Event::DelayMs(ACCEL_READ_SETTLE_MS),
        Event::ReadBytes(0xBB, 6),
        Event::SetValue(Level::High),
    ]);
}

#[test]
fn reads_temperature() {
    let (bench, mut device) = init_device();

    set_registers(&bench, TEMP_OUT_H, &[0x00, 0x19]);
    assert_eq!(device.read_temp().unwrap(), 25.0);

    // 25 + 3268 LSB is ten degrees above the reference point.
    set_registers(&bench, TEMP_OUT_H, &[0x0C, 0xDD]);
    let temp = device.read_temp().unwrap();
    assert!(libm::fabsf(temp - 35.0) < 1e-4, "{}", temp);

    assert_eq!(bench.borrow().bus_events()[1], Event::ReadBytes(0xC1, 2));
}

#[test]
fn reads_angular_rate() {
    let (bench, mut device) = init_device();
    // 164, -164, 16
    set_registers(&bench, GYRO_XOUT_H, &[0x00, 0xA4, 0xFF, 0x5C, 0x00, 0x10]);

    let gyro = device.read_gyro().unwrap();

    assert!(gyro.approx_eq(&Vector::new(10.0, -10.0, 0.9756), 1e-4), "{:?}", gyro);
    assert_eq!(bench.borrow().events, vec![
        Event::SetValue(Level::Low),
        Event::ReadBytes(0xC3, 6),
        Event::SetValue(Level::High),
    ]);
}

#[test]
fn burst_read_splits_all_quantities() {
    let (bench, mut device) = init_device();
    set_registers(&bench, ACCEL_XOUT_H, &[
        0x08, 0x00, 0xF8, 0x00, 0x00, 0x00, // accel
        0x00, 0x19, // temp
        0x00, 0x00, 0x00, 0xA4, 0xFF, 0x5C, // gyro
    ]);

    let data = device.read_all().unwrap();

    assert!(data.accel.approx_eq(&Vector::new(1.0, -1.0, 0.0), 1e-6), "{:?}", data.accel);
    assert_eq!(data.temp, 25.0);
    assert!(data.gyro.approx_eq(&Vector::new(0.0, 10.0, -10.0), 1e-4), "{:?}", data.gyro);
    assert_eq!(bench.borrow().bus_events()[1], Event::ReadBytes(0xBB, 14));
}

#[test]
fn failed_reads_return_error_and_keep_session_usable() {
    let (bench, mut device) = init_device();
    bench.borrow_mut().fail_all_transfers = true;

    assert!(device.read_accel().unwrap_err().is_transient());
    assert!(device.read_temp().unwrap_err().is_transient());
    assert!(device.read_gyro().unwrap_err().is_transient());
    assert!(device.read_id().unwrap_err().is_transient());
    assert_framed(&bench.borrow().events);

    bench.borrow_mut().fail_all_transfers = false;
    bench.borrow_mut().registers[WHO_AM_I as usize] = 0xAE;
    assert_eq!(device.read_id().unwrap(), ICM20608D_DEVICE_ID);
}

#[test]
fn raw_register_access_is_framed() {
    let (bench, mut device) = init_device();

    device.set_register_value(INT_ENABLE, 0x01).unwrap();
    assert_eq!(device.get_register_value(INT_ENABLE).unwrap(), 0x01);

    assert_eq!(bench.borrow().bus_events(), vec![
        Event::SetValue(Level::Low),
        Event::WriteByte(0x38, 0x01),
        Event::SetValue(Level::High),
        Event::SetValue(Level::Low),
        Event::ReadByte(0xB8),
        Event::SetValue(Level::High),
    ]);
}

#[test]
fn close_releases_bus_and_returns_parts() {
    let (bench, device) = init_device();

    let (_transport, _line, _delay) = device.close().ok().unwrap();

    assert_eq!(bench.borrow().events, vec![Event::Close]);
}

#[test]
fn close_failure_is_reported() {
    let (bench, device) = init_device();
    bench.borrow_mut().fail_close = true;

    let err = device.close().err().unwrap();
    assert!(matches!(err, Error::Close(MockError)));
}

#[test]
fn raw_range_write_updates_scaling() {
    let (bench, mut device) = init_device();

    device.set_register_value(ACCEL_CONFIG, AccelScaleRange::G2.as_register()).unwrap();
    device.set_register_value(GYRO_CONFIG, GyroScaleRange::D250.as_register()).unwrap();
    assert_eq!(device.config().accel_scale, AccelScaleRange::G2);
    assert_eq!(device.config().gyro_scale, GyroScaleRange::D250);

    // 16384 LSB/g at +/-2 g, 131 LSB/(deg/s) at +/-250 deg/s.
    set_registers(&bench, ACCEL_XOUT_H, &[0x40, 0x00, 0x00, 0x00, 0xC0, 0x00]);
    set_registers(&bench, GYRO_XOUT_H, &[0x00, 0x83, 0x00, 0x00, 0x00, 0x00]);
    let accel = device.read_accel().unwrap();
    let gyro = device.read_gyro().unwrap();
    assert!(accel.approx_eq(&Vector::new(1.0, 0.0, -1.0), 1e-6), "{:?}", accel);
    assert!(gyro.approx_eq(&Vector::new(1.0, 0.0, 0.0), 1e-6), "{:?}", gyro);

    let data = device.read_all().unwrap();
    assert!(data.accel.approx_eq(&Vector::new(1.0, 0.0, -1.0), 1e-6), "{:?}", data.accel);
}

#[test]
fn set_scale_writes_register_and_config() {
    let (bench, mut device) = init_device();

    device.set_accel_scale(AccelScaleRange::G4).unwrap();
    device.set_gyro_scale(GyroScaleRange::D500).unwrap();

    assert_eq!(bench.borrow().bus_events(), vec![
        Event::SetValue(Level::Low),
        Event::WriteByte(ACCEL_CONFIG, 0x08),
        Event::SetValue(Level::High),
        Event::SetValue(Level::Low),
        Event::WriteByte(GYRO_CONFIG, 0x08),
        Event::SetValue(Level::High),
    ]);
    assert_eq!(device.config().accel_sensitivity(), 8192.0);
    assert_eq!(device.config().gyro_sensitivity(), 65.5);
}

#[test]
fn failed_range_write_keeps_scaling() {
    let (bench, mut device) = init_device();
    bench.borrow_mut().fail_all_transfers = true;

    assert!(device.set_register_value(ACCEL_CONFIG, AccelScaleRange::G2.as_register()).is_err());
    assert!(device.set_gyro_scale(GyroScaleRange::D250).is_err());

    assert_eq!(device.config().accel_scale, AccelScaleRange::G16);
    assert_eq!(device.config().gyro_scale, GyroScaleRange::D2000);
}
