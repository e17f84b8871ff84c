use crate::utils::*;
use crate::*;

fn close_to(actual: f32, expected: f32, tol: f32) -> bool {
    libm::fabsf(actual - expected) <= tol
}

#[test]
fn raw_value_is_big_endian_twos_complement() {
    for (high, low) in [(0x00, 0x00), (0x08, 0x00), (0xFC, 0x00), (0x7F, 0xFF), (0x80, 0x00), (0xFF, 0xFF), (0x12, 0x34)] {
        let expected = (((high as u16) << 8) | low as u16) as i16;
        assert_eq!(raw_from_be(high, low), expected);
    }
    assert_eq!(raw_from_be(0x80, 0x00), i16::MIN);
    assert_eq!(raw_from_be(0x7F, 0xFF), i16::MAX);
    assert_eq!(raw_from_be(0xFF, 0xFF), -1);
}

#[test]
fn accel_conversion_is_linear_in_raw_value() {
    let g16 = AccelScaleRange::G16.as_scale_factor();
    assert_eq!(accel_from_raw(2048.0, g16), 1.0);
    assert_eq!(accel_from_raw(-2048.0, g16), -1.0);
    assert_eq!(accel_from_raw(0.0, g16), 0.0);
    assert_eq!(accel_from_raw(-1024.0, g16), -0.5);
}

#[test]
fn gyro_conversion_at_2000_dps() {
    let d2000 = GyroScaleRange::D2000.as_scale_factor();
    assert!(close_to(gyro_from_raw(16.0, d2000), 0.976, 0.001));
    assert!(close_to(gyro_from_raw(164.0, d2000), 10.0, 1e-5));
    assert!(close_to(gyro_from_raw(-164.0, d2000), -10.0, 1e-5));
}

#[test]
fn temperature_is_identity_at_reference_point() {
    assert_eq!(temp_from_raw(25.0), 25.0);
    assert!(close_to(temp_from_raw(25.0 + 326.8), 26.0, 1e-4));
    assert!(close_to(temp_from_raw(25.0 - 326.8), 24.0, 1e-4));
}

#[test]
fn axes_are_scaled_in_register_order() {
    let data = [0x08, 0x00, 0x00, 0x00, 0xFC, 0x00];
    let accel = axes_to_vector(&data, |raw| accel_from_raw(raw, 2048.0));
    assert!(accel.approx_eq(&Vector::new(1.0, 0.0, -0.5), 1e-6), "{:?}", accel);
}
