//! Session that can be shared between execution contexts.
//!
//! Each call runs inside a critical section, so a framed transaction started by one context is
//! always finished before another context can start its own.

use core::cell::RefCell;

use critical_section::Mutex;
use embedded_hal::delay::DelayNs;

use crate::interface::{OutputLine, Transport};
use crate::{Error, Icm20608, SensorData, Vector};

pub struct SharedIcm20608<T, L, D>
{
    inner: Mutex<RefCell<Icm20608<T, L, D>>>,
}

impl<T: Transport, L: OutputLine, D: DelayNs> SharedIcm20608<T, L, D>
{
    pub fn new(device: Icm20608<T, L, D>) -> Self {
        SharedIcm20608 {
            inner: Mutex::new(RefCell::new(device)),
        }
    }

    /// Runs `f` with exclusive access to the session.
    ///
    pub fn with<R>(&self, f: impl FnOnce(&mut Icm20608<T, L, D>) -> R) -> R {
        critical_section::with(|cs| {
            let mut device = self.inner.borrow_ref_mut(cs);
            f(&mut *device)
        })
    }

    pub fn read_id(&self) -> Result<u8, Error<T::Error, L::Error>> {
        self.with(|device| device.read_id())
    }

    pub fn read_accel(&self) -> Result<Vector, Error<T::Error, L::Error>> {
        self.with(|device| device.read_accel())
    }

    pub fn read_temp(&self) -> Result<f32, Error<T::Error, L::Error>> {
        self.with(|device| device.read_temp())
    }

    pub fn read_gyro(&self) -> Result<Vector, Error<T::Error, L::Error>> {
        self.with(|device| device.read_gyro())
    }

    pub fn read_all(&self) -> Result<SensorData, Error<T::Error, L::Error>> {
        self.with(|device| device.read_all())
    }

    pub fn into_inner(self) -> Icm20608<T, L, D> {
        self.inner.into_inner().into_inner()
    }
}
