//! Register access over Linux i2c-dev.
//!
//! This is the only place the binary touches physical hardware. Reads hand
//! back the register byte as a `u8` directly, so no textual representation
//! of the value ever exists to be misparsed. A failed write leaves the
//! device in an undefined state; there is no retry and no recovery, the
//! invocation terminates.

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Read;
use std::io::Write;
use std::os::unix::io::AsRawFd;

use thiserror::Error;

// From linux/i2c-dev.h.
const I2C_SLAVE: libc::c_ulong = 0x0703;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("Failed to open bus device '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to select device 0x{address:02x}: {source}")]
    SelectDevice {
        address: u8,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read register 0x{register:02x}: {source}")]
    Read {
        register: u8,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write register 0x{register:02x}: {source}")]
    Write {
        register: u8,
        #[source]
        source: io::Error,
    },
}

/// Blocking, register-addressed access to one bus device.
pub trait RegisterBus {
    fn read_register(&mut self, register: u8) -> Result<u8, BusError>;
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), BusError>;
}

pub struct I2cBus {
    file: File,
}

impl I2cBus {
    /// Opens `/dev/i2c-<bus_id>` and binds the file descriptor to the
    /// device at `address` for all subsequent transfers.
    pub fn open(bus_id: u8, address: u8) -> Result<I2cBus, BusError> {
        let path = format!("/dev/i2c-{}", bus_id);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|source| BusError::Open { path, source })?;

        let result = unsafe { libc::ioctl(file.as_raw_fd(), I2C_SLAVE, address as libc::c_ulong) };
        if result < 0 {
            return Err(BusError::SelectDevice {
                address,
                source: io::Error::last_os_error(),
            });
        }

        Ok(I2cBus { file })
    }
}

impl RegisterBus for I2cBus {
    fn read_register(&mut self, register: u8) -> Result<u8, BusError> {
        self.file
            .write_all(&[register])
            .map_err(|source| BusError::Read { register, source })?;
        let mut buf = [0u8; 1];
        self.file
            .read_exact(&mut buf)
            .map_err(|source| BusError::Read { register, source })?;
        Ok(buf[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), BusError> {
        self.file
            .write_all(&[register, value])
            .map_err(|source| BusError::Write { register, source })?;
        Ok(())
    }
}
