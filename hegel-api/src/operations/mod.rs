//! Concrete operations, one module per device function

pub mod mute;
pub mod power;
pub mod source_input;
pub mod volume;

pub use mute::{GetMuteOperation, GetMuteRequest, SetMuteOperation, SetMuteRequest};
pub use power::{GetPowerOperation, GetPowerRequest, SetPowerOperation, SetPowerRequest};
pub use source_input::{GetInputOperation, GetInputRequest, SetInputOperation, SetInputRequest};
pub use volume::{
    GetVolumeOperation, GetVolumeRequest, SetVolumeOperation, SetVolumeRequest,
    StepVolumeOperation, StepVolumeRequest, MAX_VOLUME,
};
