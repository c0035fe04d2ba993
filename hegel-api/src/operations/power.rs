//! Power operations: standby state query and switching

use serde::Serialize;

use crate::codec::Parameter;
use crate::command::Command;
use crate::error::ApiError;
use crate::operation::HegelOperation;
use crate::types::SwitchState;

/// Query the current power state
pub struct GetPowerOperation;

/// Request for the power status query (no parameters)
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GetPowerRequest;

impl HegelOperation for GetPowerOperation {
    type Request = GetPowerRequest;
    type Response = SwitchState;

    const COMMAND: Command = Command::Power;

    fn build_parameter(_request: &Self::Request) -> Result<Parameter, ApiError> {
        Ok(Parameter::Query)
    }

    fn parse_response(value: u32) -> Result<Self::Response, ApiError> {
        SwitchState::from_status(value)
    }
}

/// Switch the amplifier on or into standby
pub struct SetPowerOperation;

/// Request for the power switch operation
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SetPowerRequest {
    pub state: SwitchState,
}

impl HegelOperation for SetPowerOperation {
    type Request = SetPowerRequest;
    type Response = SwitchState;

    const COMMAND: Command = Command::Power;

    fn build_parameter(request: &Self::Request) -> Result<Parameter, ApiError> {
        Ok(Parameter::Switch(request.state))
    }

    /// The device echoes the accepted state back
    fn parse_response(value: u32) -> Result<Self::Response, ApiError> {
        SwitchState::from_status(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_power_parameter_encoding() {
        let on = SetPowerRequest {
            state: SwitchState::On,
        };
        assert_eq!(
            SetPowerOperation::build_parameter(&on).unwrap(),
            Parameter::Switch(SwitchState::On)
        );
        assert_eq!(
            crate::codec::encode(SetPowerOperation::COMMAND, &Parameter::Switch(SwitchState::On)),
            "-p.1\r"
        );

        let off = SetPowerRequest {
            state: SwitchState::Off,
        };
        assert_eq!(
            crate::codec::encode(
                SetPowerOperation::COMMAND,
                &SetPowerOperation::build_parameter(&off).unwrap()
            ),
            "-p.0\r"
        );
    }

    #[test]
    fn test_get_power_parses_status() {
        assert_eq!(
            GetPowerOperation::parse_response(1).unwrap(),
            SwitchState::On
        );
        assert_eq!(
            GetPowerOperation::parse_response(0).unwrap(),
            SwitchState::Off
        );
        assert!(GetPowerOperation::parse_response(7).is_err());
    }
}
