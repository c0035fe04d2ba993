//! Store implementations: in-memory map and one-file-per-key directory

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Abstract persisted settings: string keys to string values
///
/// `get` answers `None` both for missing keys and for unreadable backing
/// storage; only `set` can fail, since losing a write is worth surfacing.
pub trait SettingsStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Shared handles behave as the store they point to, so one store can be
/// observed from outside while a controller owns a handle to it.
impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "settings lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store keeping one plain-text file per key
///
/// Values are written to a temporary file first and renamed into place, so
/// a crash mid-write never leaves a half-written value behind. The only
/// on-disk format is the raw string itself.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory this store keeps its files in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = fs::read_to_string(self.key_path(key)).ok()?;
        let value = raw.trim_end_matches('\n');
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let path = self.key_path(key);
        let tmp = self.dir.join(format!(".{}.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)
    }
}
