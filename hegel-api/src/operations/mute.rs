//! Mute operations: status query and switching

use serde::Serialize;

use crate::codec::Parameter;
use crate::command::Command;
use crate::error::ApiError;
use crate::operation::HegelOperation;
use crate::types::SwitchState;

/// Query the current mute state
pub struct GetMuteOperation;

/// Request for the mute status query (no parameters)
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GetMuteRequest;

impl HegelOperation for GetMuteOperation {
    type Request = GetMuteRequest;
    type Response = SwitchState;

    const COMMAND: Command = Command::VolumeMute;

    fn build_parameter(_request: &Self::Request) -> Result<Parameter, ApiError> {
        Ok(Parameter::Query)
    }

    fn parse_response(value: u32) -> Result<Self::Response, ApiError> {
        SwitchState::from_status(value)
    }
}

/// Mute or unmute the main output
pub struct SetMuteOperation;

/// Request for the mute switch operation
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SetMuteRequest {
    pub state: SwitchState,
}

impl HegelOperation for SetMuteOperation {
    type Request = SetMuteRequest;
    type Response = SwitchState;

    const COMMAND: Command = Command::VolumeMute;

    fn build_parameter(request: &Self::Request) -> Result<Parameter, ApiError> {
        Ok(Parameter::Switch(request.state))
    }

    fn parse_response(value: u32) -> Result<Self::Response, ApiError> {
        SwitchState::from_status(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_wire_requests() {
        let request = SetMuteRequest {
            state: SwitchState::On,
        };
        let parameter = SetMuteOperation::build_parameter(&request).unwrap();
        assert_eq!(
            crate::codec::encode(SetMuteOperation::COMMAND, &parameter),
            "-m.1\r"
        );

        let query = GetMuteOperation::build_parameter(&GetMuteRequest).unwrap();
        assert_eq!(
            crate::codec::encode(GetMuteOperation::COMMAND, &query),
            "-m.?\r"
        );
    }
}
