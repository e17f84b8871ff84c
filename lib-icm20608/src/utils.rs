//! Raw sample assembly and conversion to physical units.

use crate::Vector;

/// Temperature reading at which the sensor outputs its room temperature offset, in degrees
/// celsius, and the raw value it reports there.
pub const TEMP_ROOM_OFFSET: f32 = 25.0;

/// Temperature sensitivity in LSB per degree celsius.
pub const TEMP_SENSITIVITY: f32 = 326.8;

/// Assembles a big endian two's complement register pair.
#[inline]
pub fn raw_from_be(high: u8, low: u8) -> i16 {
    i16::from_be_bytes([high, low])
}

#[inline]
pub fn reg_to_f32(high: u8, low: u8) -> f32 {
    raw_from_be(high, low) as f32
}

/// Acceleration in g for a raw accelerometer value, given the sensitivity in LSB/g.
#[inline]
pub fn accel_from_raw(raw: f32, scale_factor: f32) -> f32 {
    raw / scale_factor
}

/// Angular rate in deg/s for a raw gyroscope value, given the sensitivity in LSB/(deg/s).
#[inline]
pub fn gyro_from_raw(raw: f32, scale_factor: f32) -> f32 {
    raw / scale_factor
}

/// Die temperature in degrees celsius.
#[inline]
pub fn temp_from_raw(raw: f32) -> f32 {
    (raw - TEMP_ROOM_OFFSET) / TEMP_SENSITIVITY + TEMP_ROOM_OFFSET
}

/// Converts three consecutive big endian axis registers (X, Y, Z) into a vector, applying
/// `convert` to each raw value.
pub fn axes_to_vector(data: &[u8; 6], convert: impl Fn(f32) -> f32) -> Vector {
    let mut axes = [0.0f32; 3];
    for i in 0..3 {
        axes[i] = convert(reg_to_f32(data[i*2], data[i*2+1]));
    }
    Vector::from(axes)
}
