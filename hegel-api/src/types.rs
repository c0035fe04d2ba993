//! Domain types for amplifier state
//!
//! These model the values carried by the control protocol: binary switch
//! attributes (power, mute), relative volume steps, and the closed set of
//! source inputs with their front-panel labels.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Binary device attribute: power and mute are each either on or off
///
/// Serialized on the wire as `'1'`/`'0'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    /// The wire byte for this state
    pub fn wire(&self) -> char {
        match self {
            SwitchState::On => '1',
            SwitchState::Off => '0',
        }
    }

    /// Whether this state is [`SwitchState::On`]
    pub fn is_on(&self) -> bool {
        matches!(self, SwitchState::On)
    }

    /// Parse a device-reported status value
    ///
    /// The protocol only ever reports 0 or 1 for switch attributes; any
    /// other value is treated as a protocol mismatch rather than guessed at.
    pub fn from_status(value: u32) -> Result<Self, ApiError> {
        match value {
            0 => Ok(SwitchState::Off),
            1 => Ok(SwitchState::On),
            other => Err(ApiError::Protocol(format!(
                "unexpected switch status value {}",
                other
            ))),
        }
    }
}

impl From<bool> for SwitchState {
    fn from(on: bool) -> Self {
        if on {
            SwitchState::On
        } else {
            SwitchState::Off
        }
    }
}

/// Direction of a relative volume step
///
/// Serialized on the wire as `'u'`/`'d'`; the device computes the new level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeChange {
    Up,
    Down,
}

impl VolumeChange {
    /// The wire byte for this direction
    pub fn wire(&self) -> char {
        match self {
            VolumeChange::Up => 'u',
            VolumeChange::Down => 'd',
        }
    }
}

/// A source input on the amplifier
///
/// The protocol numbers inputs 1 through 9; the set is closed and each
/// input carries the fixed label shown on the front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    Balanced,
    Analog1,
    Analog2,
    Coaxial,
    Optical1,
    Optical2,
    Optical3,
    Usb,
    Network,
}

impl Input {
    /// All inputs in protocol order, for building UI source lists
    pub fn all() -> [Input; 9] {
        [
            Input::Balanced,
            Input::Analog1,
            Input::Analog2,
            Input::Coaxial,
            Input::Optical1,
            Input::Optical2,
            Input::Optical3,
            Input::Usb,
            Input::Network,
        ]
    }

    /// The input number used on the wire (1-9)
    pub fn number(&self) -> u8 {
        match self {
            Input::Balanced => 1,
            Input::Analog1 => 2,
            Input::Analog2 => 3,
            Input::Coaxial => 4,
            Input::Optical1 => 5,
            Input::Optical2 => 6,
            Input::Optical3 => 7,
            Input::Usb => 8,
            Input::Network => 9,
        }
    }

    /// The front-panel label for this input
    pub fn label(&self) -> &'static str {
        match self {
            Input::Balanced => "Balanced",
            Input::Analog1 => "Analog 1",
            Input::Analog2 => "Analog 2",
            Input::Coaxial => "Coaxial",
            Input::Optical1 => "Optical 1",
            Input::Optical2 => "Optical 2",
            Input::Optical3 => "Optical 3",
            Input::Usb => "USB",
            Input::Network => "Network",
        }
    }
}

impl TryFrom<u8> for Input {
    type Error = ApiError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Input::all()
            .into_iter()
            .find(|input| input.number() == number)
            .ok_or_else(|| {
                ApiError::Protocol(format!("input number {} outside supported range 1-9", number))
            })
    }
}
