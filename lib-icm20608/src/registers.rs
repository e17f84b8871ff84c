//! ICM-20608 register map.
//!
//! Every address is a 7-bit register number. Bit 7 of the byte put on the bus selects the
//! direction, see [`read_address`] and [`write_address`].

/// Set on the address byte to read from a register.
pub const READ_FLAG: u8 = 0x80;

/// Mask that clears the read flag for register writes.
pub const WRITE_MASK: u8 = 0x7F;

/// Address byte that reads `register`.
#[inline]
pub const fn read_address(register: u8) -> u8 {
    register | READ_FLAG
}

/// Address byte that writes `register`.
#[inline]
pub const fn write_address(register: u8) -> u8 {
    register & WRITE_MASK
}

// Factory self-test values, compared against a user self-test run.
pub const SELF_TEST_X_GYRO: u8 = 0x00;
pub const SELF_TEST_Y_GYRO: u8 = 0x01;
pub const SELF_TEST_Z_GYRO: u8 = 0x02;
pub const SELF_TEST_X_ACCEL: u8 = 0x0D;
pub const SELF_TEST_Y_ACCEL: u8 = 0x0E;
pub const SELF_TEST_Z_ACCEL: u8 = 0x0F;

pub const XG_OFFS_USRH: u8 = 0x13; //[15:0] XG_OFFS_USR
pub const XG_OFFS_USRL: u8 = 0x14;
pub const YG_OFFS_USRH: u8 = 0x15; //[15:0] YG_OFFS_USR
pub const YG_OFFS_USRL: u8 = 0x16;
pub const ZG_OFFS_USRH: u8 = 0x17; //[15:0] ZG_OFFS_USR
pub const ZG_OFFS_USRL: u8 = 0x18;

pub const SMPLRT_DIV: u8 = 0x19;

pub const CONFIG: u8 = 0x1A;          //[2:0] DLPF_CFG (gyro + temp)
pub const GYRO_CONFIG: u8 = 0x1B;     //[4:3] FS_SEL
pub const ACCEL_CONFIG: u8 = 0x1C;    //[4:3] ACCEL_FS_SEL
pub const ACCEL_CONFIG2: u8 = 0x1D;   //[3] ACCEL_FCHOICE_B, [2:0] A_DLPF_CFG
pub const LP_MODE_CFG: u8 = 0x1E;     //[7] GYRO_CYCLE, [6:4] G_AVGCFG
pub const ACCEL_WOM_THR: u8 = 0x1F;

pub const FIFO_EN: u8 = 0x23;

pub const FSYNC_INT: u8 = 0x36;
pub const INT_PIN_CFG: u8 = 0x37;
pub const INT_ENABLE: u8 = 0x38;
pub const INT_STATUS: u8 = 0x3A;

pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const ACCEL_XOUT_L: u8 = 0x3C;
pub const ACCEL_YOUT_H: u8 = 0x3D;
pub const ACCEL_YOUT_L: u8 = 0x3E;
pub const ACCEL_ZOUT_H: u8 = 0x3F;
pub const ACCEL_ZOUT_L: u8 = 0x40;

pub const TEMP_OUT_H: u8 = 0x41;
pub const TEMP_OUT_L: u8 = 0x42;

pub const GYRO_XOUT_H: u8 = 0x43;
pub const GYRO_XOUT_L: u8 = 0x44;
pub const GYRO_YOUT_H: u8 = 0x45;
pub const GYRO_YOUT_L: u8 = 0x46;
pub const GYRO_ZOUT_H: u8 = 0x47;
pub const GYRO_ZOUT_L: u8 = 0x48;

pub const SIGNAL_PATH_RESET: u8 = 0x68;
pub const ACCEL_INTEL_CTRL: u8 = 0x69;
pub const USER_CTRL: u8 = 0x6A;
pub const PWR_MGMT_1: u8 = 0x6B;      //[7] DEVICE_RESET, [6] SLEEP, [5] CYCLE, [2:0] CLKSEL
pub const PWR_MGMT_2: u8 = 0x6C;      //[5:3] DISABLE_XA..ZA, [2:0] DISABLE_XG..ZG

pub const FIFO_COUNT_H: u8 = 0x72;
pub const FIFO_COUNT_L: u8 = 0x73;
pub const FIFO_R_W: u8 = 0x74;

pub const WHO_AM_I: u8 = 0x75;

pub const XA_OFFSET_H: u8 = 0x77;     //[14:0] XA_OFFS
pub const XA_OFFSET_L: u8 = 0x78;
pub const YA_OFFSET_H: u8 = 0x7A;     //[14:0] YA_OFFS
pub const YA_OFFSET_L: u8 = 0x7B;
pub const ZA_OFFSET_H: u8 = 0x7D;     //[14:0] ZA_OFFS
pub const ZA_OFFSET_L: u8 = 0x7E;

/// `PWR_MGMT_1` value that resets all internal registers to their defaults.
pub const PWR_MGMT_1_DEVICE_RESET: u8 = 0x80;

/// `PWR_MGMT_2` value with every accelerometer and gyroscope axis enabled.
pub const PWR_MGMT_2_ALL_AXES_ON: u8 = 0x00;

/// `LP_MODE_CFG` value that keeps the gyroscope out of low power cycling.
pub const LP_MODE_CFG_OFF: u8 = 0x00;

/// `FIFO_EN` value with nothing routed into the FIFO.
pub const FIFO_EN_NONE: u8 = 0x00;
