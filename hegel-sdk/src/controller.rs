//! The amplifier controller: client + endpoint + persisted settings
//!
//! This is the surface a UI layer talks to. It owns the configured device
//! host, loads it from the settings store at construction, and writes it
//! back whenever a new host passes the reachability check.

use hegel_api::{HegelClient, Input, SwitchState, VolumeChange};
use serde::Serialize;
use settings_store::SettingsStore;
use tracing::{debug, warn};

use crate::error::{Result, SdkError};

/// Settings key under which the last known device host is persisted
pub const HOST_KEY: &str = "host";

/// One snapshot of everything a remote-control UI renders at startup
///
/// Produced by [`AmpController::status`] with one round trip per field;
/// the device is the only source of truth, nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmpStatus {
    pub input: Input,
    pub volume: u8,
    pub power: SwitchState,
    pub mute: SwitchState,
}

impl AmpStatus {
    /// The front-panel label of the current input, for display
    pub fn input_label(&self) -> &'static str {
        self.input.label()
    }
}

/// Remote controller for one Hegel amplifier
///
/// Holds the typed client, the currently configured host, and the settings
/// store the host is persisted in. All device operations are blocking and
/// perform exactly one exchange; callers must not issue two operations
/// concurrently (single UI-thread usage is assumed).
pub struct AmpController {
    client: HegelClient,
    settings: Box<dyn SettingsStore>,
    host: Option<String>,
}

impl AmpController {
    /// Create a controller, loading the persisted host if one exists
    pub fn new(settings: Box<dyn SettingsStore>) -> Self {
        Self::with_client(HegelClient::new(), settings)
    }

    /// Create a controller around a custom client (timeouts, port)
    pub fn with_client(client: HegelClient, settings: Box<dyn SettingsStore>) -> Self {
        let host = settings.get(HOST_KEY);
        match &host {
            Some(host) => debug!(%host, "loaded persisted device host"),
            None => debug!("no persisted device host"),
        }
        Self {
            client,
            settings,
            host,
        }
    }

    /// The currently configured device host, if any
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Point the controller at `host` without probing or persisting
    ///
    /// Used when the caller has already validated the host; the usual UI
    /// flow goes through [`adopt_host`](AmpController::adopt_host) instead.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = Some(host.into());
    }

    /// Whether a device is accepting connections at `host`
    ///
    /// Plain boolean gate; connection failures are never surfaced.
    pub fn is_reachable(&self, host: &str) -> bool {
        self.client.is_reachable(host)
    }

    /// Adopt `host` if it is reachable: probe, then switch and persist
    ///
    /// Returns `true` when the host passed the probe and is now the
    /// configured endpoint. On probe failure nothing changes and `false`
    /// is returned. Only persistence itself can error.
    pub fn adopt_host(&mut self, host: &str) -> Result<bool> {
        if !self.client.is_reachable(host) {
            warn!(%host, "host failed reachability probe, keeping current endpoint");
            return Ok(false);
        }
        self.settings.set(HOST_KEY, host)?;
        self.host = Some(host.to_string());
        debug!(%host, "adopted and persisted device host");
        Ok(true)
    }

    fn current_host(&self) -> Result<&str> {
        self.host.as_deref().ok_or(SdkError::NoHost)
    }

    /// Read everything a UI renders at startup: input, volume, power, mute
    pub fn status(&self) -> Result<AmpStatus> {
        let host = self.current_host()?;
        let status = AmpStatus {
            input: self.client.current_input(host)?,
            volume: self.client.current_volume(host)?,
            power: self.client.power_state(host)?,
            mute: self.client.mute_state(host)?,
        };
        debug!(
            input = status.input.label(),
            volume = status.volume,
            power = status.power.is_on(),
            mute = status.mute.is_on(),
            "read device status"
        );
        Ok(status)
    }

    /// The currently selected source input
    pub fn current_input(&self) -> Result<Input> {
        Ok(self.client.current_input(self.current_host()?)?)
    }

    /// The current volume level
    pub fn current_volume(&self) -> Result<u8> {
        Ok(self.client.current_volume(self.current_host()?)?)
    }

    /// The current power state
    pub fn power_state(&self) -> Result<SwitchState> {
        Ok(self.client.power_state(self.current_host()?)?)
    }

    /// The current mute state
    pub fn mute_state(&self) -> Result<SwitchState> {
        Ok(self.client.mute_state(self.current_host()?)?)
    }

    /// Switch the amplifier on or into standby
    pub fn set_power(&self, state: SwitchState) -> Result<SwitchState> {
        Ok(self.client.set_power(self.current_host()?, state)?)
    }

    /// Mute or unmute the main output
    pub fn set_mute(&self, state: SwitchState) -> Result<SwitchState> {
        Ok(self.client.set_mute(self.current_host()?, state)?)
    }

    /// Step the volume; returns the device-computed new level
    pub fn step_volume(&self, direction: VolumeChange) -> Result<u8> {
        Ok(self.client.step_volume(self.current_host()?, direction)?)
    }

    /// Set an absolute volume level; returns the level the device settled on
    pub fn set_volume(&self, level: u8) -> Result<u8> {
        Ok(self.client.set_volume(self.current_host()?, level)?)
    }

    /// Select a source input; returns the echoed new input
    pub fn select_input(&self, input: Input) -> Result<Input> {
        Ok(self.client.select_input(self.current_host()?, input)?)
    }
}
