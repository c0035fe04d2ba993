//! Source input operations: status query and selection

use serde::Serialize;

use crate::codec::Parameter;
use crate::command::Command;
use crate::error::ApiError;
use crate::operation::HegelOperation;
use crate::types::Input;

/// Convert a reply value to an [`Input`], rejecting numbers outside 1-9
fn parse_input(value: u32) -> Result<Input, ApiError> {
    let number = u8::try_from(value)
        .map_err(|_| ApiError::Protocol(format!("input value {} out of range", value)))?;
    Input::try_from(number)
}

/// Query the currently selected source input
pub struct GetInputOperation;

/// Request for the input status query (no parameters)
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GetInputRequest;

impl HegelOperation for GetInputOperation {
    type Request = GetInputRequest;
    type Response = Input;

    const COMMAND: Command = Command::SourceInput;

    fn build_parameter(_request: &Self::Request) -> Result<Parameter, ApiError> {
        Ok(Parameter::Query)
    }

    fn parse_response(value: u32) -> Result<Self::Response, ApiError> {
        parse_input(value)
    }
}

/// Select a source input
///
/// Range safety comes from the type: [`Input`] only exists for the nine
/// supported sources, so no runtime validation is needed here.
pub struct SetInputOperation;

/// Request for the input selection operation
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SetInputRequest {
    pub input: Input,
}

impl HegelOperation for SetInputOperation {
    type Request = SetInputRequest;
    type Response = Input;

    const COMMAND: Command = Command::SourceInput;

    fn build_parameter(request: &Self::Request) -> Result<Parameter, ApiError> {
        Ok(Parameter::Level(request.input.number()))
    }

    fn parse_response(value: u32) -> Result<Self::Response, ApiError> {
        parse_input(value)
    }
}
