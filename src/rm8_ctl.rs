//! The relay state machine.
//!
//! The latch byte is never cached: the device registers are the single
//! source of truth, read fresh inside the locked critical section before
//! every mutation.

use crate::bitmask::clear_bit;
use crate::bitmask::set_bit;
use crate::cmd::Command;
use crate::i2c::BusError;
use crate::i2c::RegisterBus;
use crate::rm8_types::HardwareAddress;
use crate::rm8_types::RelayId;
use crate::rm8_types::RelayState;

use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("Device is not initialized (IODIR = 0x{iodir:02x}), run 'rm8ctl init off' first")]
    NotInitialized { iodir: u8 },

    #[error(transparent)]
    Bus(#[from] BusError),
}

pub struct Rm8Control<B> {
    bus: B,
    hw: HardwareAddress,
}

impl<B: RegisterBus> Rm8Control<B> {
    pub fn new(bus: B, hw: HardwareAddress) -> Rm8Control<B> {
        Rm8Control { bus, hw }
    }

    pub fn execute(&mut self, command: Command) -> Result<(), ControlError> {
        match command {
            Command::Init(state) => self.init(state),
            Command::SetRelay(relay, state) => self.set(&relay, state),
        }
    }

    /// Forces all eight lines to output mode, then drives every relay to
    /// `state` in one bulk write. Destructive on purpose: this is the only
    /// way out of an unknown or non-output configuration, so it never
    /// reads the device first.
    pub fn init(&mut self, state: RelayState) -> Result<(), ControlError> {
        self.bus.write_register(self.hw.iodir, 0x00)?;
        let latch = match state {
            RelayState::On => 0xFF,
            RelayState::Off => 0x00,
        };
        self.bus.write_register(self.hw.olat, latch)?;
        info!("Initialized, all relays '{:?}'", state);
        Ok(())
    }

    /// Switches one relay, preserving the other seven bits of the latch.
    /// Refuses to write anything while the direction register says the
    /// lines are not all outputs.
    pub fn set(&mut self, relay: &RelayId, state: RelayState) -> Result<(), ControlError> {
        let iodir = self.bus.read_register(self.hw.iodir)?;
        if iodir != 0x00 {
            return Err(ControlError::NotInitialized { iodir });
        }

        let current = self.bus.read_register(self.hw.olat)?;
        let next = match state {
            RelayState::On => set_bit(current, relay.bit()),
            RelayState::Off => clear_bit(current, relay.bit()),
        };
        self.bus.write_register(self.hw.olat, next)?;

        info!(
            "Set '{:?}' to '{:?}' (latch 0x{:02x} -> 0x{:02x})",
            relay, state, current, next
        );
        Ok(())
    }
}
