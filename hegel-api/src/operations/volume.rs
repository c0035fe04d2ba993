//! Volume operations: status query, absolute level, and stepping

use serde::Serialize;

use crate::codec::Parameter;
use crate::command::Command;
use crate::error::ApiError;
use crate::operation::HegelOperation;
use crate::types::VolumeChange;

/// The highest level the volume control accepts
pub const MAX_VOLUME: u8 = 100;

/// Convert a reply value to a volume level
fn parse_level(value: u32) -> Result<u8, ApiError> {
    u8::try_from(value)
        .map_err(|_| ApiError::Protocol(format!("volume value {} out of range", value)))
}

/// Query the current volume level
pub struct GetVolumeOperation;

/// Request for the volume status query (no parameters)
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GetVolumeRequest;

impl HegelOperation for GetVolumeOperation {
    type Request = GetVolumeRequest;
    type Response = u8;

    const COMMAND: Command = Command::VolumeControl;

    fn build_parameter(_request: &Self::Request) -> Result<Parameter, ApiError> {
        Ok(Parameter::Query)
    }

    fn parse_response(value: u32) -> Result<Self::Response, ApiError> {
        parse_level(value)
    }
}

/// Set the volume to an absolute level
pub struct SetVolumeOperation;

/// Request for the absolute volume operation
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SetVolumeRequest {
    pub level: u8,
}

impl HegelOperation for SetVolumeOperation {
    type Request = SetVolumeRequest;
    type Response = u8;

    const COMMAND: Command = Command::VolumeControl;

    fn build_parameter(request: &Self::Request) -> Result<Parameter, ApiError> {
        if request.level > MAX_VOLUME {
            return Err(ApiError::InvalidParameter(format!(
                "volume {} is above the maximum of {}",
                request.level, MAX_VOLUME
            )));
        }
        Ok(Parameter::Level(request.level))
    }

    /// The device echoes the level it settled on
    fn parse_response(value: u32) -> Result<Self::Response, ApiError> {
        parse_level(value)
    }
}

/// Step the volume up or down by one unit
pub struct StepVolumeOperation;

/// Request for the relative volume operation
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StepVolumeRequest {
    pub direction: VolumeChange,
}

impl HegelOperation for StepVolumeOperation {
    type Request = StepVolumeRequest;
    type Response = u8;

    const COMMAND: Command = Command::VolumeControl;

    fn build_parameter(request: &Self::Request) -> Result<Parameter, ApiError> {
        Ok(Parameter::Step(request.direction))
    }

    /// The device computes and reports the resulting level
    fn parse_response(value: u32) -> Result<Self::Response, ApiError> {
        parse_level(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(VolumeChange::Up, "-v.u\r")]
    #[case(VolumeChange::Down, "-v.d\r")]
    fn test_step_volume_wire_requests(#[case] direction: VolumeChange, #[case] wire: &str) {
        let request = StepVolumeRequest { direction };
        let parameter = StepVolumeOperation::build_parameter(&request).unwrap();
        assert_eq!(
            crate::codec::encode(StepVolumeOperation::COMMAND, &parameter),
            wire
        );
    }

    #[test]
    fn test_set_volume_validates_range() {
        let ok = SetVolumeRequest { level: MAX_VOLUME };
        assert_eq!(
            SetVolumeOperation::build_parameter(&ok).unwrap(),
            Parameter::Level(MAX_VOLUME)
        );

        let too_loud = SetVolumeRequest { level: 101 };
        assert!(matches!(
            SetVolumeOperation::build_parameter(&too_loud),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_volume_level_parsing() {
        assert_eq!(GetVolumeOperation::parse_response(37).unwrap(), 37);
        assert!(GetVolumeOperation::parse_response(9999).is_err());
    }
}
