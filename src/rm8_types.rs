#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelayId {
    Relay0,
    Relay1,
    Relay2,
    Relay3,
    Relay4,
    Relay5,
    Relay6,
    Relay7,
}

impl RelayId {
    /// Bit position of this relay within the output latch byte.
    pub fn bit(&self) -> u8 {
        match self {
            RelayId::Relay0 => 0,
            RelayId::Relay1 => 1,
            RelayId::Relay2 => 2,
            RelayId::Relay3 => 3,
            RelayId::Relay4 => 4,
            RelayId::Relay5 => 5,
            RelayId::Relay6 => 6,
            RelayId::Relay7 => 7,
        }
    }
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelayState {
    On,
    Off,
}

/// Fixed per deployment, never mutated at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HardwareAddress {
    /// Number of the i2c-dev bus the expander hangs on.
    pub bus_id: u8,
    /// 7-bit device address, 0x20..=0x27 on the MCP23008.
    pub device_address: u8,
    /// Offset of the direction register (IODIR).
    pub iodir: u8,
    /// Offset of the output latch register (OLAT).
    pub olat: u8,
}
