//! ADS1219 driver.
//! Blocking API over [`RegisterBus`]; the async version mirrors it behind the `async` feature.

use crate::bus::{I2cBus, RegisterBus};
#[cfg(feature = "async")]
use crate::bus::AsyncRegisterBus;
use crate::data_types::{Configuration, ConversionMode, DataRate, Gain, InputMux, VoltageReference};
use crate::error::Error;
use crate::registers::{
    addr, cmd, code_to_mv, decode_config, decode_gain, encode_config, encode_conversion_mode,
    encode_data_rate, encode_gain, encode_mux, encode_voltage_reference, replace_field, sign_extend_24,
    ConfigBits, StatusBits, CONVERSION_BYTES, INTERNAL_REFERENCE_MV, RESET_DELAY_US,
};

/// ADS1219 driver.
///
/// Keeps a mirror of the PGA gain, needed to scale conversions to millivolts,
/// and the last conversion result read from the device.
pub struct Ads1219<B> {
    bus: B,
    gain: Gain,
    result: i32,
}

impl<B> Ads1219<B> {
    /// Create a driver over any register bus. Gain mirror starts at x1, result at 0.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            gain: Gain::One,
            result: 0,
        }
    }

    /// Release the underlying bus.
    pub fn free(self) -> B {
        self.bus
    }

    /// Gain the driver assumes the device is using.
    pub fn gain(&self) -> Gain {
        self.gain
    }

    /// Raw signed result of the last successful [`read_conversion`](Self::read_conversion).
    /// Not adjusted for gain.
    pub fn get_conversion_raw(&self) -> i32 {
        self.result
    }

    /// Last result in millivolts.
    ///
    /// `reference_mv` is the reference span: 2048 for the internal reference,
    /// or REFP - REFN when the external reference is selected. The value is
    /// not checked.
    pub fn get_conversion_mv(&self, reference_mv: f32) -> f32 {
        code_to_mv(self.result, reference_mv, self.gain)
    }

    /// Last result in millivolts against the internal 2.048 V reference.
    pub fn get_conversion_mv_internal(&self) -> f32 {
        self.get_conversion_mv(INTERNAL_REFERENCE_MV)
    }

    /// Sign-extend and keep a conversion; a wrong byte count comes back as the error value.
    fn store_conversion(&mut self, bytes: [u8; CONVERSION_BYTES], count: usize) -> Result<i32, usize> {
        if count != CONVERSION_BYTES {
            #[cfg(feature = "defmt")]
            defmt::warn!("ads1219: conversion read returned {=usize} bytes", count);
            return Err(count);
        }
        self.result = sign_extend_24(bytes);
        Ok(self.result)
    }

    fn track_written_config(&mut self, config: ConfigBits) {
        self.gain = decode_gain(&config);
    }
}

impl<I2C> Ads1219<I2cBus<I2C>> {
    /// Create a driver on an I2C peripheral at the default address (0x40).
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::new(I2cBus::new(i2c))
    }

    /// Create a driver on an I2C peripheral at a custom address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self::new(I2cBus::with_address(i2c, address))
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.bus.address()
    }

    /// Release the I2C peripheral.
    pub fn release_i2c(self) -> I2C {
        self.bus.release()
    }
}

impl<B> Ads1219<B>
where
    B: RegisterBus,
{
    /// Reset the device, wait for it to settle and check that the
    /// configuration register reads back as 0x00.
    ///
    /// On success the gain mirror is back at x1, matching the device.
    pub fn begin<D>(&mut self, delay: &mut D) -> Result<(), Error<B::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.reset()?;
        delay.delay_us(RESET_DELAY_US);
        let config = self.get_configuration_register()?;
        if !config.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ads1219: config reads {=u8:#x} after reset", config.bits());
            return Err(Error::NotReset(config.bits()));
        }
        self.gain = Gain::One;
        #[cfg(feature = "defmt")]
        defmt::debug!("ads1219: reset verified");
        Ok(())
    }

    /// Soft reset. Registers return to their defaults once the device finishes.
    pub fn reset(&mut self) -> Result<(), Error<B::Error>> {
        self.bus.write_command(cmd::RESET).map_err(Error::Bus)
    }

    /// Start a single-shot conversion, or start/restart continuous conversions.
    pub fn start_sync(&mut self) -> Result<(), Error<B::Error>> {
        self.bus.write_command(cmd::START_SYNC).map_err(Error::Bus)
    }

    /// Enter power-down. Use [`reset`](Self::reset) or [`start_sync`](Self::start_sync) to wake.
    pub fn power_down(&mut self) -> Result<(), Error<B::Error>> {
        self.bus.write_command(cmd::POWER_DOWN).map_err(Error::Bus)
    }

    /// Read the raw configuration register.
    pub fn get_configuration_register(&mut self) -> Result<ConfigBits, Error<B::Error>> {
        let val = self.bus.read_register(addr::CONFIG_READ).map_err(Error::Bus)?;
        Ok(ConfigBits::from_bits_retain(val))
    }

    /// Write the raw configuration register. The gain mirror follows the
    /// written gain bit once the write succeeds.
    pub fn set_configuration_register(&mut self, config: ConfigBits) -> Result<(), Error<B::Error>> {
        self.bus
            .write_register(addr::CONFIG_WRITE, config.bits())
            .map_err(Error::Bus)?;
        self.track_written_config(config);
        Ok(())
    }

    /// Read and decode the configuration register.
    pub fn read_configuration(&mut self) -> Result<Configuration, Error<B::Error>> {
        let bits = self.get_configuration_register()?;
        Ok(decode_config(&bits))
    }

    /// Encode and write the whole configuration register.
    pub fn write_configuration(&mut self, config: &Configuration) -> Result<(), Error<B::Error>> {
        self.set_configuration_register(encode_config(config))
    }

    /// Update one field of the configuration register (read-modify-write).
    fn update_config(&mut self, mask: ConfigBits, field: ConfigBits) -> Result<(), Error<B::Error>> {
        let cur = self.get_configuration_register()?;
        self.set_configuration_register(replace_field(cur, mask, field))
    }

    pub fn set_conversion_mode(&mut self, mode: ConversionMode) -> Result<(), Error<B::Error>> {
        self.update_config(ConfigBits::CM, encode_conversion_mode(mode))
    }

    pub fn set_input_multiplexer(&mut self, mux: InputMux) -> Result<(), Error<B::Error>> {
        self.update_config(ConfigBits::MUX, encode_mux(mux))
    }

    /// Set the PGA gain. The local gain mirror only changes if the write succeeds.
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), Error<B::Error>> {
        self.update_config(ConfigBits::GAIN, encode_gain(gain))
    }

    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<B::Error>> {
        self.update_config(ConfigBits::DR, encode_data_rate(rate))
    }

    pub fn set_voltage_reference(&mut self, vref: VoltageReference) -> Result<(), Error<B::Error>> {
        self.update_config(ConfigBits::VREF, encode_voltage_reference(vref))
    }

    /// Read the 3-byte conversion result and store it sign-extended.
    ///
    /// A transfer of any length other than 3 is rejected and the stored
    /// result is left untouched.
    pub fn read_conversion(&mut self) -> Result<i32, Error<B::Error>> {
        let mut buf = [0u8; CONVERSION_BYTES];
        let count = self
            .bus
            .read_register_region(cmd::READ_DATA, &mut buf)
            .map_err(Error::Bus)?;
        self.store_conversion(buf, count).map_err(Error::ShortRead)
    }

    /// Read the status register.
    pub fn read_status(&mut self) -> Result<StatusBits, Error<B::Error>> {
        let val = self.bus.read_register(addr::STATUS_READ).map_err(Error::Bus)?;
        Ok(StatusBits::from_bits_retain(val))
    }

    /// `true` when a new result is ready.
    ///
    /// A failed status read also yields `false`; use
    /// [`read_status`](Self::read_status) to tell the two apart.
    pub fn data_ready(&mut self) -> bool {
        matches!(self.read_status(), Ok(status) if status.contains(StatusBits::DRDY))
    }
}

#[cfg(feature = "async")]
impl<B> Ads1219<B>
where
    B: AsyncRegisterBus,
{
    /// Async version of [`begin`](Self::begin).
    pub async fn begin_async<D>(&mut self, delay: &mut D) -> Result<(), Error<B::Error>>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        self.reset_async().await?;
        delay.delay_us(RESET_DELAY_US).await;
        let config = self.get_configuration_register_async().await?;
        if !config.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ads1219: config reads {=u8:#x} after reset", config.bits());
            return Err(Error::NotReset(config.bits()));
        }
        self.gain = Gain::One;
        #[cfg(feature = "defmt")]
        defmt::debug!("ads1219: reset verified");
        Ok(())
    }

    pub async fn reset_async(&mut self) -> Result<(), Error<B::Error>> {
        self.bus.write_command(cmd::RESET).await.map_err(Error::Bus)
    }

    pub async fn start_sync_async(&mut self) -> Result<(), Error<B::Error>> {
        self.bus.write_command(cmd::START_SYNC).await.map_err(Error::Bus)
    }

    pub async fn power_down_async(&mut self) -> Result<(), Error<B::Error>> {
        self.bus.write_command(cmd::POWER_DOWN).await.map_err(Error::Bus)
    }

    pub async fn get_configuration_register_async(&mut self) -> Result<ConfigBits, Error<B::Error>> {
        let val = self.bus.read_register(addr::CONFIG_READ).await.map_err(Error::Bus)?;
        Ok(ConfigBits::from_bits_retain(val))
    }

    pub async fn set_configuration_register_async(&mut self, config: ConfigBits) -> Result<(), Error<B::Error>> {
        self.bus
            .write_register(addr::CONFIG_WRITE, config.bits())
            .await
            .map_err(Error::Bus)?;
        self.track_written_config(config);
        Ok(())
    }

    pub async fn read_configuration_async(&mut self) -> Result<Configuration, Error<B::Error>> {
        let bits = self.get_configuration_register_async().await?;
        Ok(decode_config(&bits))
    }

    pub async fn write_configuration_async(&mut self, config: &Configuration) -> Result<(), Error<B::Error>> {
        self.set_configuration_register_async(encode_config(config)).await
    }

    async fn update_config_async(&mut self, mask: ConfigBits, field: ConfigBits) -> Result<(), Error<B::Error>> {
        let cur = self.get_configuration_register_async().await?;
        self.set_configuration_register_async(replace_field(cur, mask, field)).await
    }

    pub async fn set_conversion_mode_async(&mut self, mode: ConversionMode) -> Result<(), Error<B::Error>> {
        self.update_config_async(ConfigBits::CM, encode_conversion_mode(mode)).await
    }

    pub async fn set_input_multiplexer_async(&mut self, mux: InputMux) -> Result<(), Error<B::Error>> {
        self.update_config_async(ConfigBits::MUX, encode_mux(mux)).await
    }

    pub async fn set_gain_async(&mut self, gain: Gain) -> Result<(), Error<B::Error>> {
        self.update_config_async(ConfigBits::GAIN, encode_gain(gain)).await
    }

    pub async fn set_data_rate_async(&mut self, rate: DataRate) -> Result<(), Error<B::Error>> {
        self.update_config_async(ConfigBits::DR, encode_data_rate(rate)).await
    }

    pub async fn set_voltage_reference_async(&mut self, vref: VoltageReference) -> Result<(), Error<B::Error>> {
        self.update_config_async(ConfigBits::VREF, encode_voltage_reference(vref)).await
    }

    pub async fn read_conversion_async(&mut self) -> Result<i32, Error<B::Error>> {
        let mut buf = [0u8; CONVERSION_BYTES];
        let count = self
            .bus
            .read_register_region(cmd::READ_DATA, &mut buf)
            .await
            .map_err(Error::Bus)?;
        self.store_conversion(buf, count).map_err(Error::ShortRead)
    }

    pub async fn read_status_async(&mut self) -> Result<StatusBits, Error<B::Error>> {
        let val = self.bus.read_register(addr::STATUS_READ).await.map_err(Error::Bus)?;
        Ok(StatusBits::from_bits_retain(val))
    }

    pub async fn data_ready_async(&mut self) -> bool {
        matches!(self.read_status_async().await, Ok(status) if status.contains(StatusBits::DRDY))
    }
}
