/// Gyroscope and temperature DLPF (Digital Low Pass Filter) mode, written to `CONFIG`. This
/// determines the highest frequency that is not filtered out.
/// 
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DLPFMode {
    Bw250Hz = 0x00,
    Bw176Hz = 0x01,
    Bw92Hz = 0x02,
    Bw41Hz = 0x03,
    Bw20Hz = 0x04,
    Bw10Hz = 0x05,
    Bw5Hz = 0x06,
}

impl DLPFMode {
    pub const fn as_register(&self) -> u8 {
        *self as u8
    }
}

impl Default for DLPFMode {
    fn default() -> Self {
        DLPFMode::Bw20Hz
    }
}

/// Accelerometer DLPF mode, written to `ACCEL_CONFIG2` with `ACCEL_FCHOICE_B` cleared.
/// 
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelDLPFMode {
    Bw218Hz = 0x00,
    Bw99Hz = 0x02,
    Bw45Hz = 0x03,
    Bw21Hz = 0x04,
    Bw10Hz = 0x05,
    Bw5Hz = 0x06,
    Bw420Hz = 0x07,
}

impl AccelDLPFMode {
    pub const fn as_register(&self) -> u8 {
        *self as u8
    }
}

impl Default for AccelDLPFMode {
    fn default() -> Self {
        AccelDLPFMode::Bw21Hz
    }
}
