//! ADS1219 Rust Driver
//!
//! Driver for the TI ADS1219 24-bit, 4-channel delta-sigma ADC. The chip is
//! reached through a small register-bus capability ([`bus::RegisterBus`]);
//! [`bus::I2cBus`] provides it for any `embedded-hal` I2C peripheral.
//! Optional async support (`async` feature) and defmt formatting (`defmt`
//! feature) follow the blocking API one-to-one.

#![no_std]

pub mod bus;
pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use bus::{I2cBus, RegisterBus};
#[cfg(feature = "async")]
pub use bus::AsyncRegisterBus;
pub use driver::Ads1219;
pub use error::Error;
pub use registers::DEFAULT_I2C_ADDRESS;
