//! Background image slots persisted as data URLs.
//!
//! Uploads are read from disk, wrapped as `data:image/...;base64,` strings,
//! and written under a fixed key per slot. When the store refuses a payload
//! (quota) the slot keeps an in-memory copy for the rest of the run, so the
//! performer still sees their backdrop and only loses it on restart.

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::store::{KvStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Lock,
    Home,
    Notes,
}

impl Slot {
    pub fn key(self) -> &'static str {
        match self {
            Slot::Lock => "bgLock",
            Slot::Home => "bgHome",
            Slot::Notes => "bgNotes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::Lock => "lockscreen",
            Slot::Home => "home screen",
            Slot::Notes => "notes",
        }
    }
}

/// Where an accepted upload ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Persisted,
    /// Quota refused the write; kept only for this run.
    MemoryOnly,
}

/// The three backdrop slots plus the session-only overlay for oversized
/// payloads.
#[derive(Debug, Default)]
pub struct Backgrounds {
    transient: HashMap<Slot, String>,
}

impl Backgrounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path`, encode it, and install it under `slot`. Oversized
    /// payloads degrade to memory-only instead of failing.
    pub fn install_from_file(
        &mut self,
        slot: Slot,
        path: &Path,
        store: &mut dyn KvStore,
    ) -> Result<Placement> {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read image '{}'", path.display()))?;
        let url = data_url(path, &bytes);
        match store.set(slot.key(), &url) {
            Ok(()) => {
                self.transient.remove(&slot);
                Ok(Placement::Persisted)
            }
            Err(StoreError::QuotaExceeded { .. }) => {
                self.transient.insert(slot, url);
                Ok(Placement::MemoryOnly)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The active backdrop for a slot: the session overlay wins, then the
    /// store, then `None` meaning "default backdrop".
    pub fn current(&self, slot: Slot, store: &dyn KvStore) -> Option<String> {
        self.transient
            .get(&slot)
            .cloned()
            .or_else(|| store.get(slot.key()))
    }

    pub fn is_custom(&self, slot: Slot, store: &dyn KvStore) -> bool {
        self.transient.contains_key(&slot) || store.get(slot.key()).is_some()
    }
}

/// Build a `data:` URL, guessing the media type from the file extension.
fn data_url(path: &Path, bytes: &[u8]) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let media = match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    };
    format!("data:{media};base64,{}", BASE64.encode(bytes))
}
