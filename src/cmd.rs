use crate::rm8_types::RelayId;
use crate::rm8_types::RelayId::*;
use crate::rm8_types::RelayState;

use thiserror::Error;

pub const USAGE: &str = "usage: rm8ctl <init|0..7> <on|off>";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Expected exactly two arguments, got {0}. {USAGE}")]
    ArgumentCount(usize),

    #[error("Invalid target '{0}', expected 'init' or a relay number 0..7")]
    InvalidTarget(String),

    #[error("Invalid state '{0}', expected 'on' or 'off'")]
    InvalidState(String),
}

/// One invocation's worth of work, parsed once and consumed once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Force all lines to output mode and drive every relay to one state.
    Init(RelayState),
    /// Switch a single relay without disturbing the other seven.
    SetRelay(RelayId, RelayState),
}

impl Command {
    /// Builds a command from the two verbatim CLI tokens. Tokens are
    /// matched literally, no trimming and no case folding, so that what
    /// reaches the hardware is exactly what was typed.
    pub fn from_args(args: &[String]) -> Result<Command, ParseError> {
        if args.len() != 2 {
            return Err(ParseError::ArgumentCount(args.len()));
        }

        let target = match args[0].as_str() {
            "init" => None,
            "0" => Some(Relay0),
            "1" => Some(Relay1),
            "2" => Some(Relay2),
            "3" => Some(Relay3),
            "4" => Some(Relay4),
            "5" => Some(Relay5),
            "6" => Some(Relay6),
            "7" => Some(Relay7),
            unknown => return Err(ParseError::InvalidTarget(unknown.to_string())),
        };

        let state = match args[1].as_str() {
            "on" => RelayState::On,
            "off" => RelayState::Off,
            unknown => return Err(ParseError::InvalidState(unknown.to_string())),
        };

        Ok(match target {
            None => Command::Init(state),
            Some(relay) => Command::SetRelay(relay, state),
        })
    }
}
