//! Minimal key-value persistence for session settings
//!
//! The SDK needs exactly one persisted value (the last known device host),
//! so the interface is deliberately tiny: string keys to string values,
//! `get` and `set`, nothing else. Two implementations are provided:
//! [`MemoryStore`] for tests and ephemeral sessions, and [`FileStore`]
//! which keeps one plain-text file per key.

mod store;

pub use store::{FileStore, MemoryStore, SettingsStore};
