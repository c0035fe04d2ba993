/// Represents the control commands understood by Hegel amplifiers
///
/// Each command is identified by a single ASCII byte on the wire. Every
/// operation in this crate is built on exactly one of these commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Standby/on state of the amplifier
    Power,

    /// Selected source input (1-9)
    SourceInput,

    /// Main volume: absolute level, stepping, and status
    VolumeControl,

    /// Mute state of the main output
    VolumeMute,
}

impl Command {
    /// The single-byte command code used on the wire
    pub fn code(&self) -> char {
        match self {
            Command::Power => 'p',
            Command::SourceInput => 'i',
            Command::VolumeControl => 'v',
            Command::VolumeMute => 'm',
        }
    }

    /// Human-readable command name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Command::Power => "power",
            Command::SourceInput => "source_input",
            Command::VolumeControl => "volume_control",
            Command::VolumeMute => "volume_mute",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Command::Power, 'p', "power")]
    #[case(Command::SourceInput, 'i', "source_input")]
    #[case(Command::VolumeControl, 'v', "volume_control")]
    #[case(Command::VolumeMute, 'm', "volume_mute")]
    fn test_command_codes(#[case] command: Command, #[case] code: char, #[case] name: &str) {
        assert_eq!(command.code(), code);
        assert_eq!(command.name(), name);
    }
}
