use tcp_client::LineClient;

use crate::codec;
use crate::error::Result;
use crate::operation::HegelOperation;
use crate::operations::{
    GetInputOperation, GetInputRequest, GetMuteOperation, GetMuteRequest, GetPowerOperation,
    GetPowerRequest, GetVolumeOperation, GetVolumeRequest, SetInputOperation, SetInputRequest,
    SetMuteOperation, SetMuteRequest, SetPowerOperation, SetPowerRequest, SetVolumeOperation,
    SetVolumeRequest, StepVolumeOperation, StepVolumeRequest,
};
use crate::types::{Input, SwitchState, VolumeChange};

/// A client for executing control operations against a Hegel amplifier
///
/// This client bridges the stateless operation definitions and actual
/// network requests. Each call performs exactly one exchange: encode the
/// request line, write it over a fresh connection, read one reply line,
/// decode and type the result. The client holds no device state; every
/// read re-queries the device.
#[derive(Debug, Clone)]
pub struct HegelClient {
    line_client: LineClient,
}

impl HegelClient {
    /// Create a client with the default transport configuration
    pub fn new() -> Self {
        Self {
            line_client: LineClient::new(),
        }
    }

    /// Create a client with a custom transport (timeouts, port)
    pub fn with_line_client(line_client: LineClient) -> Self {
        Self { line_client }
    }

    /// Execute an operation against the device at `host`
    ///
    /// Transport and protocol failures propagate unchanged; there is no
    /// retry or recovery at this layer.
    pub fn execute<Op: HegelOperation>(
        &self,
        host: &str,
        request: &Op::Request,
    ) -> Result<Op::Response> {
        let parameter = Op::build_parameter(request)?;
        let line = codec::encode(Op::COMMAND, &parameter);
        let reply = self.line_client.exchange(host, &line)?;
        let value = codec::decode(&reply, Op::COMMAND)?;
        Op::parse_response(value)
    }

    /// Whether a device accepts connections at `host`
    ///
    /// Never fails: every connection problem reads as `false`.
    pub fn is_reachable(&self, host: &str) -> bool {
        self.line_client.probe_reachable(host)
    }

    /// The currently selected source input
    pub fn current_input(&self, host: &str) -> Result<Input> {
        self.execute::<GetInputOperation>(host, &GetInputRequest)
    }

    /// The current volume level
    pub fn current_volume(&self, host: &str) -> Result<u8> {
        self.execute::<GetVolumeOperation>(host, &GetVolumeRequest)
    }

    /// The current power state
    pub fn power_state(&self, host: &str) -> Result<SwitchState> {
        self.execute::<GetPowerOperation>(host, &GetPowerRequest)
    }

    /// The current mute state
    pub fn mute_state(&self, host: &str) -> Result<SwitchState> {
        self.execute::<GetMuteOperation>(host, &GetMuteRequest)
    }

    /// Switch the amplifier on or into standby; returns the echoed state
    pub fn set_power(&self, host: &str, state: SwitchState) -> Result<SwitchState> {
        self.execute::<SetPowerOperation>(host, &SetPowerRequest { state })
    }

    /// Mute or unmute the output; returns the echoed state
    pub fn set_mute(&self, host: &str, state: SwitchState) -> Result<SwitchState> {
        self.execute::<SetMuteOperation>(host, &SetMuteRequest { state })
    }

    /// Step the volume; returns the device-computed new level
    pub fn step_volume(&self, host: &str, direction: VolumeChange) -> Result<u8> {
        self.execute::<StepVolumeOperation>(host, &StepVolumeRequest { direction })
    }

    /// Set an absolute volume level; returns the level the device settled on
    pub fn set_volume(&self, host: &str, level: u8) -> Result<u8> {
        self.execute::<SetVolumeOperation>(host, &SetVolumeRequest { level })
    }

    /// Select a source input; returns the echoed new input
    pub fn select_input(&self, host: &str, input: Input) -> Result<Input> {
        self.execute::<SetInputOperation>(host, &SetInputRequest { input })
    }
}

impl Default for HegelClient {
    fn default() -> Self {
        Self::new()
    }
}
