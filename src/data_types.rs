//! Data types for ADS1219 driver (configuration fields, address pins).

use crate::registers::DEFAULT_I2C_ADDRESS;

/// Input multiplexer selection (CONFIG bits 7-5).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum InputMux {
    /// AINP = AIN0, AINN = AIN1 (reset default).
    #[default]
    DiffP0N1 = 0,
    /// AINP = AIN2, AINN = AIN3.
    DiffP2N3,
    /// AINP = AIN1, AINN = AIN2.
    DiffP1N2,
    /// AINP = AIN0, AINN = AGND.
    Single0,
    /// AINP = AIN1, AINN = AGND.
    Single1,
    /// AINP = AIN2, AINN = AGND.
    Single2,
    /// AINP = AIN3, AINN = AGND.
    Single3,
    /// AINP and AINN shorted to AVDD / 2.
    Shorted,
}

impl InputMux {
    /// Field value, unshifted.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Decode from the low three bits of `bits`.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => InputMux::DiffP0N1,
            1 => InputMux::DiffP2N3,
            2 => InputMux::DiffP1N2,
            3 => InputMux::Single0,
            4 => InputMux::Single1,
            5 => InputMux::Single2,
            6 => InputMux::Single3,
            _ => InputMux::Shorted,
        }
    }
}

/// PGA gain (CONFIG bit 4).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Gain {
    #[default]
    One,
    Four,
}

impl Gain {
    pub fn bits(self) -> u8 {
        match self {
            Gain::One => 0,
            Gain::Four => 1,
        }
    }

    /// Amplification factor applied before the modulator.
    pub fn factor(self) -> u8 {
        match self {
            Gain::One => 1,
            Gain::Four => 4,
        }
    }
}

/// Output data rate (CONFIG bits 3-2).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DataRate {
    #[default]
    Sps20,
    Sps90,
    Sps330,
    Sps1000,
}

impl DataRate {
    pub fn bits(self) -> u8 {
        match self {
            DataRate::Sps20 => 0b00,
            DataRate::Sps90 => 0b01,
            DataRate::Sps330 => 0b10,
            DataRate::Sps1000 => 0b11,
        }
    }

    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => DataRate::Sps20,
            0b01 => DataRate::Sps90,
            0b10 => DataRate::Sps330,
            _ => DataRate::Sps1000,
        }
    }

    /// Nominal samples per second.
    pub fn samples_per_second(self) -> u16 {
        match self {
            DataRate::Sps20 => 20,
            DataRate::Sps90 => 90,
            DataRate::Sps330 => 330,
            DataRate::Sps1000 => 1000,
        }
    }
}

/// Conversion mode (CONFIG bit 1).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ConversionMode {
    /// One conversion per START/SYNC.
    #[default]
    SingleShot,
    /// Free-running after START/SYNC.
    Continuous,
}

/// Voltage reference selection (CONFIG bit 0).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VoltageReference {
    /// Internal 2.048 V reference.
    #[default]
    Internal,
    /// External REFP - REFN.
    External,
}

/// Decoded configuration register. `Default` matches the post-reset value 0x00.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Configuration {
    pub mux: InputMux,
    pub gain: Gain,
    pub data_rate: DataRate,
    pub mode: ConversionMode,
    pub vref: VoltageReference,
}

/// Connection of an address pin (A0 or A1).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressPin {
    Dgnd,
    Dvdd,
    Sda,
    Scl,
}

impl AddressPin {
    fn code(self) -> u8 {
        match self {
            AddressPin::Dgnd => 0b00,
            AddressPin::Dvdd => 0b01,
            AddressPin::Sda => 0b10,
            AddressPin::Scl => 0b11,
        }
    }
}

/// 7-bit I2C address for the given A1/A0 strapping (`1 0 0 A1H A1L A0H A0L`).
pub fn address_from_pins(a1: AddressPin, a0: AddressPin) -> u8 {
    DEFAULT_I2C_ADDRESS | (a1.code() << 2) | a0.code()
}
