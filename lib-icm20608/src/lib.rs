#![cfg_attr(not(test), no_std)]

pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod dlpf_mode;
pub use dlpf_mode::*;

pub mod clock_source;
pub use clock_source::*;

pub mod config;
pub use config::*;

pub mod data;
pub use data::*;

pub mod error;
pub use error::*;

pub mod interface;
pub use interface::*;

pub mod registers;

pub mod protocol;

pub mod icm20608;
pub use icm20608::*;

pub mod hal;

#[cfg(feature = "shared")]
pub mod shared;
#[cfg(feature = "shared")]
pub use shared::*;

pub mod utils;

#[cfg(test)]
mod tests;

/// `WHO_AM_I` value of an ICM-20608-G.
/// 
pub const ICM20608G_DEVICE_ID: u8 = 0xAF;

/// `WHO_AM_I` value of an ICM-20608-D.
/// 
pub const ICM20608D_DEVICE_ID: u8 = 0xAE;
