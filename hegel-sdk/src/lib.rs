//! # Hegel SDK - Remote Control for Hegel Network Amplifiers
//!
//! Provides a blocking, typed API for controlling Hegel amplifiers
//! (H90/H190/H390 family) over their TCP control port:
//!
//! ```rust,no_run
//! use hegel_sdk::{AmpController, SwitchState, VolumeChange};
//!
//! fn main() -> Result<(), hegel_sdk::SdkError> {
//!     let mut amp = AmpController::new(hegel_sdk::default_settings_store()?);
//!
//!     // Validate and persist a host in one step; later sessions pick it up.
//!     if amp.host().is_none() && !amp.adopt_host("192.168.1.40")? {
//!         eprintln!("amplifier not reachable");
//!         return Ok(());
//!     }
//!
//!     let status = amp.status()?;
//!     println!("{} at volume {}", status.input_label(), status.volume);
//!
//!     amp.set_power(SwitchState::On)?;
//!     amp.step_volume(VolumeChange::Up)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The SDK is the top of a small stack of workspace crates:
//!
//! ```text
//! hegel-sdk (controller + host persistence)
//!     ↓
//! hegel-api (typed operations, wire codec)
//!     ↓
//! tcp-client (one exchange per connection, reachability probe)
//! ```
//!
//! Everything is synchronous and connect-per-request: each operation opens
//! a connection, performs one write/read exchange, and closes it. There is
//! no caching; every read re-queries the device.

pub mod controller;
pub mod error;
pub mod logging;

pub use controller::{AmpController, AmpStatus, HOST_KEY};
pub use error::{Result, SdkError};

// Re-exported so applications can configure timeouts and build requests
// without depending on the inner crates directly.
pub use hegel_api::{ApiError, HegelClient, Input, SwitchState, VolumeChange};
pub use settings_store::{FileStore, MemoryStore, SettingsStore};
pub use tcp_client::{LineClient, DEVICE_PORT};

/// Open the default file-backed settings store
///
/// Lives under the platform config directory (`hegel-remote/`); falls back
/// to the system temp dir when no config directory is available.
pub fn default_settings_store() -> std::io::Result<Box<dyn SettingsStore>> {
    let base = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
    let store = FileStore::open(base.join("hegel-remote"))?;
    Ok(Box::new(store))
}
