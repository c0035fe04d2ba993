//! Minimal remote-control session: adopt a host, read status, nudge volume.
//!
//! Usage: cargo run --example basic_usage -- <host>

use hegel_sdk::logging::{init_logging, LoggingMode};
use hegel_sdk::{AmpController, VolumeChange};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingMode::Development)?;

    let host = std::env::args()
        .nth(1)
        .ok_or("usage: basic_usage <host>")?;

    let mut amp = AmpController::new(hegel_sdk::default_settings_store()?);
    if !amp.adopt_host(&host)? {
        eprintln!("{} is not reachable on the control port", host);
        std::process::exit(1);
    }

    let status = amp.status()?;
    println!(
        "input: {}  volume: {}  power: {}  mute: {}",
        status.input_label(),
        status.volume,
        if status.power.is_on() { "on" } else { "standby" },
        if status.mute.is_on() { "on" } else { "off" },
    );

    let new_volume = amp.step_volume(VolumeChange::Up)?;
    println!("volume stepped up to {}", new_volume);

    Ok(())
}
