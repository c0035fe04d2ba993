//! High-level control API for Hegel network amplifiers
//!
//! This crate provides a type-safe, trait-based API for the Hegel control
//! protocol. It uses the private `tcp-client` crate for the low-level
//! line exchange.
//!
//! The protocol itself is tiny: four single-letter commands (`p`ower,
//! `i`nput, `v`olume, `m`ute), each taking either a `?` query or a short
//! parameter, answered by one `-<cmd>.<digits>` line. Everything here is
//! about giving that exchange a typed surface:
//!
//! ```rust,no_run
//! use hegel_api::{HegelClient, Input, SwitchState, VolumeChange};
//!
//! let client = HegelClient::new();
//! let host = "192.168.1.40";
//!
//! let volume = client.current_volume(host)?;
//! let input = client.current_input(host)?;
//! println!("{} at volume {}", input.label(), volume);
//!
//! client.set_power(host, SwitchState::On)?;
//! client.step_volume(host, VolumeChange::Up)?;
//! client.select_input(host, Input::Usb)?;
//! # Ok::<(), hegel_api::ApiError>(())
//! ```

pub mod client;
pub mod codec;
pub mod command;
pub mod error;
pub mod operation;
pub mod operations;
pub mod types;

pub use client::HegelClient;
pub use command::Command;
pub use error::{ApiError, Result};
pub use operation::HegelOperation;
pub use types::{Input, SwitchState, VolumeChange};
