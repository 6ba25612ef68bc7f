//! Shared test doubles.

#![allow(dead_code)]

use ads1219_rs::bus::RegisterBus;
use ads1219_rs::registers::{addr, cmd};

/// Delay that only accumulates the requested time.
#[derive(Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

/// In-memory ADS1219 that keeps a live configuration byte.
pub struct FakeBus {
    pub config: u8,
    pub status: u8,
    pub data: [u8; 3],
    /// Bytes reported by the next region read.
    pub region_len: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub commands: Vec<u8>,
}

impl FakeBus {
    pub fn new(config: u8) -> Self {
        Self {
            config,
            status: 0,
            data: [0; 3],
            region_len: 3,
            fail_reads: false,
            fail_writes: false,
            commands: Vec::new(),
        }
    }
}

impl RegisterBus for FakeBus {
    type Error = ();

    fn write_command(&mut self, command: u8) -> Result<(), ()> {
        if self.fail_writes {
            return Err(());
        }
        self.commands.push(command);
        if command == cmd::RESET {
            self.config = 0;
        }
        Ok(())
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, ()> {
        if self.fail_reads {
            return Err(());
        }
        match reg {
            addr::CONFIG_READ => Ok(self.config),
            addr::STATUS_READ => Ok(self.status),
            _ => Err(()),
        }
    }

    fn read_register_region(&mut self, reg: u8, buf: &mut [u8]) -> Result<usize, ()> {
        if self.fail_reads || reg != cmd::READ_DATA {
            return Err(());
        }
        let n = self.region_len.min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        Ok(n)
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), ()> {
        if self.fail_writes || reg != addr::CONFIG_WRITE {
            return Err(());
        }
        self.config = value;
        Ok(())
    }
}
