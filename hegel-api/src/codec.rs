//! Line codec for the Hegel control protocol
//!
//! Requests are `-<code>.<param>\r`; replies are `-<code>.<digits>` with a
//! carriage-return terminator. Command codes are single bytes and payloads
//! are decimal digits, so parsing is strict: any deviation is a hard
//! failure, never a best-effort recovery.

use crate::command::Command;
use crate::error::ApiError;
use crate::types::{SwitchState, VolumeChange};

/// A request parameter in its typed form, before wire encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// `?` — ask for the current status value
    Query,
    /// `1`/`0` — set a switch attribute
    Switch(SwitchState),
    /// `u`/`d` — step the volume by one unit
    Step(VolumeChange),
    /// Decimal integer — absolute volume level or input number
    Level(u8),
}

impl Parameter {
    /// Render the parameter in its wire form
    pub fn wire(&self) -> String {
        match self {
            Parameter::Query => "?".to_string(),
            Parameter::Switch(state) => state.wire().to_string(),
            Parameter::Step(direction) => direction.wire().to_string(),
            Parameter::Level(level) => level.to_string(),
        }
    }
}

/// Encode a command and parameter into a complete request line
pub fn encode(command: Command, parameter: &Parameter) -> String {
    format!("-{}.{}\r", command.code(), parameter.wire())
}

/// Decode a reply line for the given command into its integer value
///
/// The reply must be exactly `-<code>.<digits>` for the expected command,
/// optionally still carrying its `\r` terminator. A reply for a different
/// command, missing digits, trailing garbage, or an overlong value are all
/// reported as [`ApiError::Protocol`].
pub fn decode(reply: &str, command: Command) -> Result<u32, ApiError> {
    let line = reply.strip_suffix('\r').unwrap_or(reply);
    let prefix = format!("-{}.", command.code());

    let digits = line.strip_prefix(prefix.as_str()).ok_or_else(|| {
        ApiError::Protocol(format!(
            "reply {:?} does not match {} command",
            line,
            command.name()
        ))
    })?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::Protocol(format!(
            "reply {:?} carries no decimal value for {}",
            line,
            command.name()
        )));
    }

    digits.parse::<u32>().map_err(|_| {
        ApiError::Protocol(format!(
            "reply value {:?} out of range for {}",
            digits,
            command.name()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Command::Power, Parameter::Switch(SwitchState::On), "-p.1\r")]
    #[case(Command::Power, Parameter::Switch(SwitchState::Off), "-p.0\r")]
    #[case(Command::VolumeControl, Parameter::Step(VolumeChange::Up), "-v.u\r")]
    #[case(Command::VolumeControl, Parameter::Step(VolumeChange::Down), "-v.d\r")]
    #[case(Command::VolumeControl, Parameter::Query, "-v.?\r")]
    #[case(Command::VolumeControl, Parameter::Level(42), "-v.42\r")]
    #[case(Command::SourceInput, Parameter::Level(5), "-i.5\r")]
    #[case(Command::VolumeMute, Parameter::Switch(SwitchState::Off), "-m.0\r")]
    fn test_encode(#[case] command: Command, #[case] parameter: Parameter, #[case] wire: &str) {
        assert_eq!(encode(command, &parameter), wire);
    }

    #[test]
    fn test_decode_value() {
        assert_eq!(decode("-v.37", Command::VolumeControl).unwrap(), 37);
        assert_eq!(decode("-i.5", Command::SourceInput).unwrap(), 5);
        assert_eq!(decode("-p.0", Command::Power).unwrap(), 0);
    }

    #[test]
    fn test_decode_tolerates_terminator() {
        assert_eq!(decode("-v.100\r", Command::VolumeControl).unwrap(), 100);
    }

    #[rstest]
    #[case("-i.5")] // reply for a different command
    #[case("-v.")] // no digits
    #[case("-v.u")] // non-digit payload
    #[case("-v.3x")] // trailing garbage
    #[case("v.37")] // missing leading dash
    #[case("")] // empty/truncated
    #[case("-v.99999999999")] // overflows u32
    fn test_decode_rejects_malformed(#[case] reply: &str) {
        assert!(matches!(
            decode(reply, Command::VolumeControl),
            Err(ApiError::Protocol(_))
        ));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let request = encode(Command::SourceInput, &Parameter::Level(5));
        assert_eq!(request, "-i.5\r");
        // The device echoes the accepted value in the same framing.
        assert_eq!(decode("-i.5", Command::SourceInput).unwrap(), 5);
    }
}
