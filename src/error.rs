//! Error definitions for ADS1219 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<BusError> {
    /// Underlying bus transaction failed.
    Bus(BusError),
    /// Conversion read returned this many bytes instead of 3.
    ShortRead(usize),
    /// Configuration register did not read back as 0x00 after reset.
    NotReset(u8),
}

impl<BusError: core::fmt::Debug> core::fmt::Display for Error<BusError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::ShortRead(n) => write!(f, "conversion read returned {} bytes, expected 3", n),
            Error::NotReset(v) => write!(f, "configuration register reads 0x{:02X} after reset", v),
        }
    }
}

impl<BusError: core::fmt::Debug> core::error::Error for Error<BusError> {}
