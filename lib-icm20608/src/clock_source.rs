/// `CLKSEL` bits of `PWR_MGMT_1`.
/// 
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource
{
    /// Internal 20 MHz oscillator.
    InternalOscillator = 0,

    /// Auto selects the best available clock source, the PLL if ready, else the internal
    /// oscillator.
    Auto = 1,

    /// Stops the clock and keeps the timing generator in reset
    Stop = 7,
}

impl ClockSource {
    pub const fn as_register(&self) -> u8 {
        *self as u8
    }
}

impl Default for ClockSource {
    fn default() -> Self {
        ClockSource::Auto
    }
}
