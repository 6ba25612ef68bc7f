//! Register map, command codes and conversion helpers for ADS1219.
//! Values are taken from the datasheet (SBAS924).

use crate::data_types::{Configuration, ConversionMode, DataRate, Gain, InputMux, VoltageReference};

/// Default I2C address with A1 = A0 = DGND.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x40;
/// Highest address selectable through the A1/A0 pins.
pub const MAX_I2C_ADDRESS: u8 = 0x4F;

/// Single-byte commands.
pub mod cmd {
    /// Reset the device; configuration returns to 0x00.
    pub const RESET: u8 = 0x06;
    /// Start or restart conversions.
    pub const START_SYNC: u8 = 0x08;
    /// Enter power-down mode.
    pub const POWER_DOWN: u8 = 0x02;
    /// Read conversion data (followed by a 3-byte read).
    pub const READ_DATA: u8 = 0x10;
}

/// Register access codes.
pub mod addr {
    /// Configuration register, write.
    pub const CONFIG_WRITE: u8 = 0x40;
    /// Configuration register, read.
    pub const CONFIG_READ: u8 = 0x20;
    /// Status register, read only.
    pub const STATUS_READ: u8 = 0x24;
}

/// Length of a conversion result in bytes.
pub const CONVERSION_BYTES: usize = 3;
/// Bit 23 of the reassembled 24-bit code.
pub const CONVERSION_SIGN_BIT: u32 = 1 << 23;
/// Positive full-scale of a 24-bit signed code (2^23).
pub const FULL_SCALE: f32 = 8_388_608.0;
/// Internal reference, in millivolts.
pub const INTERNAL_REFERENCE_MV: f32 = 2048.0;
/// Post-reset wait before the configuration register is read back (datasheet minimum 100 us).
pub const RESET_DELAY_US: u32 = 1_000;

/// Field shifts inside the configuration register.
pub const DATA_RATE_SHIFT: u8 = 2;
pub const GAIN_SHIFT: u8 = 4;
pub const MUX_SHIFT: u8 = 5;

bitflags::bitflags! {
    /// Configuration register bits (read 0x20 / write 0x40).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ConfigBits: u8 {
        /// Bits 7-5: input multiplexer.
        const MUX2 = 1 << 7;
        const MUX1 = 1 << 6;
        const MUX0 = 1 << 5;
        /// Bit 4: gain (0 = x1, 1 = x4).
        const GAIN = 1 << 4;
        /// Bits 3-2: data rate.
        const DR1  = 1 << 3;
        const DR0  = 1 << 2;
        /// Bit 1: conversion mode (0 = single-shot, 1 = continuous).
        const CM   = 1 << 1;
        /// Bit 0: voltage reference (0 = internal, 1 = external).
        const VREF = 1 << 0;

        const MUX = Self::MUX2.bits() | Self::MUX1.bits() | Self::MUX0.bits();
        const DR  = Self::DR1.bits() | Self::DR0.bits();
    }

    /// Status register bits (read 0x24).
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct StatusBits: u8 {
        /// Bit 7: new conversion result ready.
        const DRDY = 1 << 7;
        /// Bits 6-0: reserved (device id).
        const ID   = 0x7F;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigBits {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ConfigBits({=u8:#x})", self.bits())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusBits {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "StatusBits({=u8:#x})", self.bits())
    }
}

/// Extract the input multiplexer field.
pub fn decode_mux(bits: &ConfigBits) -> InputMux {
    InputMux::from_bits((bits.bits() & ConfigBits::MUX.bits()) >> MUX_SHIFT)
}

/// Extract the gain field.
pub fn decode_gain(bits: &ConfigBits) -> Gain {
    if bits.contains(ConfigBits::GAIN) {
        Gain::Four
    } else {
        Gain::One
    }
}

/// Extract the data rate field.
pub fn decode_data_rate(bits: &ConfigBits) -> DataRate {
    DataRate::from_bits((bits.bits() & ConfigBits::DR.bits()) >> DATA_RATE_SHIFT)
}

/// Extract the conversion mode field.
pub fn decode_conversion_mode(bits: &ConfigBits) -> ConversionMode {
    if bits.contains(ConfigBits::CM) {
        ConversionMode::Continuous
    } else {
        ConversionMode::SingleShot
    }
}

/// Extract the voltage reference field.
pub fn decode_voltage_reference(bits: &ConfigBits) -> VoltageReference {
    if bits.contains(ConfigBits::VREF) {
        VoltageReference::External
    } else {
        VoltageReference::Internal
    }
}

/// Place a mux selection at bits 7-5.
pub fn encode_mux(mux: InputMux) -> ConfigBits {
    ConfigBits::from_bits_truncate(mux.bits() << MUX_SHIFT)
}

/// Place a gain selection at bit 4.
pub fn encode_gain(gain: Gain) -> ConfigBits {
    ConfigBits::from_bits_truncate(gain.bits() << GAIN_SHIFT)
}

/// Place a data rate at bits 3-2.
pub fn encode_data_rate(rate: DataRate) -> ConfigBits {
    ConfigBits::from_bits_truncate(rate.bits() << DATA_RATE_SHIFT)
}

/// Place a conversion mode at bit 1.
pub fn encode_conversion_mode(mode: ConversionMode) -> ConfigBits {
    match mode {
        ConversionMode::SingleShot => ConfigBits::empty(),
        ConversionMode::Continuous => ConfigBits::CM,
    }
}

/// Place a voltage reference selection at bit 0.
pub fn encode_voltage_reference(vref: VoltageReference) -> ConfigBits {
    match vref {
        VoltageReference::Internal => ConfigBits::empty(),
        VoltageReference::External => ConfigBits::VREF,
    }
}

/// Replace the bits under `mask` in `current` with those of `field`; everything else is kept.
pub fn replace_field(current: ConfigBits, mask: ConfigBits, field: ConfigBits) -> ConfigBits {
    (current & !mask) | (field & mask)
}

/// Decode a full configuration register.
pub fn decode_config(bits: &ConfigBits) -> Configuration {
    Configuration {
        mux: decode_mux(bits),
        gain: decode_gain(bits),
        data_rate: decode_data_rate(bits),
        mode: decode_conversion_mode(bits),
        vref: decode_voltage_reference(bits),
    }
}

/// Encode a full configuration register.
pub fn encode_config(config: &Configuration) -> ConfigBits {
    encode_mux(config.mux)
        | encode_gain(config.gain)
        | encode_data_rate(config.data_rate)
        | encode_conversion_mode(config.mode)
        | encode_voltage_reference(config.vref)
}

/// Reserved/id bits of the status register.
pub fn device_id(bits: &StatusBits) -> u8 {
    bits.bits() & StatusBits::ID.bits()
}

/// Assemble a big-endian 24-bit two's-complement code into an `i32`.
pub fn sign_extend_24(bytes: [u8; 3]) -> i32 {
    let raw = u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]);
    if raw & CONVERSION_SIGN_BIT != 0 {
        (raw | 0xFF00_0000) as i32
    } else {
        raw as i32
    }
}

/// Convert a raw code to millivolts for the given reference span and PGA gain.
pub fn code_to_mv(raw: i32, reference_mv: f32, gain: Gain) -> f32 {
    let mut mv = raw as f32 / FULL_SCALE * reference_mv;
    if gain == Gain::Four {
        mv /= 4.0;
    }
    mv
}
