use std::{error::Error, fmt, io};


pub type SensorError = icm20608::Error<io::Error, sysfs_gpio::Error>;

#[derive(Debug)]
pub enum AppError
{
    Sensor(SensorError),
}

impl Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sensor(err) => write!(f, "ICM20608 error: {}", err),
        }
    }
}

impl From<SensorError> for AppError
{
    fn from(err: SensorError) -> Self {
        AppError::Sensor(err)
    }
}
