//! Profile-backed key-value persistence.
//!
//! Every persistent fact about a performance — trick settings and uploaded
//! backgrounds alike — lives in one flat string-to-string map. Absence of a
//! key always means "use the compiled-in default", and a single oversized
//! value is refused without disturbing anything already stored.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Upper bound for a single stored value, in bytes.
///
/// Background images encoded as data URLs are the only values that ever get
/// near this; settings are a few bytes each.
pub const MAX_VALUE_BYTES: usize = 2 * 1024 * 1024;

/// File name of the profile map inside the profile directory.
pub const PROFILE_FILE: &str = "profile.json";

/// Why a write was refused. Callers treat `QuotaExceeded` as recoverable
/// (fall back to an in-memory value) and everything else as a real fault.
#[derive(Debug)]
pub enum StoreError {
    /// The value exceeds [`MAX_VALUE_BYTES`]. Nothing was written.
    QuotaExceeded { key: String, len: usize },
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::QuotaExceeded { key, len } => {
                write!(
                    f,
                    "value for '{key}' is {len} bytes, over the {MAX_VALUE_BYTES}-byte limit"
                )
            }
            StoreError::Io(err) => write!(f, "profile store I/O failed: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::QuotaExceeded { .. } => None,
            StoreError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// String-keyed, string-valued persistence with localStorage semantics.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Profile store persisted as one JSON object on disk.
///
/// Writes go through on every `set`; there is no batching and no atomicity
/// across keys, matching the original per-key storage model.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or create) the profile under `dir`. A missing or unreadable
    /// profile file starts empty rather than failing the launch.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create profile dir '{}'", dir.display()))?;
        let path = dir.join(PROFILE_FILE);
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.entries)
            .map_err(|err| StoreError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // Quota is checked before the map is touched so a refused write can
        // never clobber the previous value under the same key.
        if value.len() > MAX_VALUE_BYTES {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                len: value.len(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// In-memory store with the same quota contract. Used by tests and as the
/// session-only fallback when the file store refuses a payload.
#[derive(Default)]
pub struct MemStore {
    entries: BTreeMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if value.len() > MAX_VALUE_BYTES {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                len: value.len(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
