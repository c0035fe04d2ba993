use serde::Serialize;

use crate::codec::Parameter;
use crate::command::Command;
use crate::error::ApiError;

/// Base trait for all Hegel control operations
///
/// Each operation binds one wire command to a typed request and response.
/// Implementations are stateless: they describe how to build the request
/// parameter and how to interpret the device's integer reply, while
/// [`HegelClient`](crate::HegelClient) performs the actual exchange.
pub trait HegelOperation {
    /// The request type for this operation, must be serializable
    type Request: Serialize;

    /// The typed result produced from the device's reply value
    type Response;

    /// The wire command this operation is built on
    const COMMAND: Command;

    /// Build the wire parameter from the request data
    ///
    /// Parameter validation happens here, before any network I/O; a
    /// rejected request surfaces as [`ApiError::InvalidParameter`].
    fn build_parameter(request: &Self::Request) -> Result<Parameter, ApiError>;

    /// Interpret the decoded reply value as the typed response
    fn parse_response(value: u32) -> Result<Self::Response, ApiError>;
}
