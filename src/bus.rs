//! Register-bus capability used by the driver, and its I2C adapter.

use crate::registers::DEFAULT_I2C_ADDRESS;

/// Byte-oriented access to an ADS1219: single-byte commands, single register
/// read/write, and a multi-byte region read that reports how much it got.
pub trait RegisterBus {
    type Error;

    /// Send a command byte with no payload.
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Read one byte from `reg`.
    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error>;

    /// Read up to `buf.len()` bytes starting at `reg`; returns the number of bytes filled.
    fn read_register_region(&mut self, reg: u8, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write one byte to `reg`.
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;
}

/// Async twin of [`RegisterBus`].
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait AsyncRegisterBus {
    type Error;

    async fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    async fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error>;

    async fn read_register_region(&mut self, reg: u8, buf: &mut [u8]) -> Result<usize, Self::Error>;

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;
}

/// [`RegisterBus`] over an I2C peripheral at a fixed 7-bit address.
/// Reads use a repeated start between the register byte and the data.
pub struct I2cBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cBus<I2C> {
    /// Bus at the default address (0x40).
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: DEFAULT_I2C_ADDRESS,
        }
    }

    /// Bus at a custom address (see [`crate::data_types::address_from_pins`]).
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Return the 7-bit I2C address.
    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    /// Give back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterBus for I2cBus<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[command])
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[reg], &mut buf)?;
        Ok(buf[0])
    }

    fn read_register_region(&mut self, reg: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.i2c.write_read(self.address, &[reg], buf)?;
        Ok(buf.len())
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[reg, value])
    }
}

#[cfg(feature = "async")]
impl<I2C> AsyncRegisterBus for I2cBus<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    type Error = I2C::Error;

    async fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[command]).await
    }

    async fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[reg], &mut buf).await?;
        Ok(buf[0])
    }

    async fn read_register_region(&mut self, reg: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.i2c.write_read(self.address, &[reg], buf).await?;
        Ok(buf.len())
    }

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[reg, value]).await
    }
}
