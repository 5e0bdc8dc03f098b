//! Trick settings, persisted one key at a time.
//!
//! Each field maps to its own store key, independently present or absent.
//! Loading overrides the compiled-in default only when the stored value both
//! exists and parses; saving writes every key back as its string form. This
//! keeps a never-configured profile fully deterministic.

#[cfg(test)]
mod tests;

use crate::store::{KvStore, StoreError};

pub const KEY_CODE_LENGTH: &str = "codeLength";
pub const KEY_REFERENCE: &str = "referenceNumber";
pub const KEY_FORCED_ERRORS: &str = "forcedErrors";
pub const KEY_NOTES_MODE: &str = "notesMode";
pub const KEY_GHOST_MODE: &str = "ghostMode";
pub const KEY_SPECTATOR: &str = "spectatorName";
pub const KEY_ACTIVATED: &str = "isActivated";

/// The passcode is always 4 or 6 digits, matching real phone lockscreens.
pub const CODE_LENGTHS: [u8; 2] = [4, 6];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// 4 or 6.
    pub code_length: u8,
    /// Hidden operand; displayed result is `entered - reference_number`.
    pub reference_number: i64,
    /// Full-length entries deliberately rejected before the real unlock.
    pub forced_errors: u32,
    /// Render the result inside a notes-app narrative instead of a number.
    pub notes_mode: bool,
    /// Background taps silently fill the code while locked.
    pub ghost_mode: bool,
    /// Name woven into the notes narrative.
    pub spectator_name: String,
    /// When false the unlock behaves like an ordinary phone: no result.
    pub activated: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            code_length: 4,
            reference_number: 4050,
            forced_errors: 0,
            notes_mode: false,
            ghost_mode: false,
            spectator_name: String::new(),
            activated: true,
        }
    }
}

impl Settings {
    /// Load from the store, keeping the default for any key that is absent
    /// or fails to parse.
    pub fn load(store: &dyn KvStore) -> Self {
        let mut settings = Self::default();
        if let Some(n) = store.get(KEY_CODE_LENGTH).and_then(|raw| raw.parse().ok()) {
            if CODE_LENGTHS.contains(&n) {
                settings.code_length = n;
            }
        }
        if let Some(n) = store.get(KEY_REFERENCE).and_then(|raw| raw.parse().ok()) {
            settings.reference_number = n;
        }
        if let Some(n) = store.get(KEY_FORCED_ERRORS).and_then(|raw| raw.parse().ok()) {
            settings.forced_errors = n;
        }
        if let Some(flag) = store.get(KEY_NOTES_MODE).as_deref().and_then(parse_flag) {
            settings.notes_mode = flag;
        }
        if let Some(flag) = store.get(KEY_GHOST_MODE).as_deref().and_then(parse_flag) {
            settings.ghost_mode = flag;
        }
        if let Some(name) = store.get(KEY_SPECTATOR) {
            settings.spectator_name = name;
        }
        if let Some(flag) = store.get(KEY_ACTIVATED).as_deref().and_then(parse_flag) {
            settings.activated = flag;
        }
        settings
    }

    /// Write every key through to the store as its string representation.
    pub fn save(&self, store: &mut dyn KvStore) -> Result<(), StoreError> {
        store.set(KEY_CODE_LENGTH, &self.code_length.to_string())?;
        store.set(KEY_REFERENCE, &self.reference_number.to_string())?;
        store.set(KEY_FORCED_ERRORS, &self.forced_errors.to_string())?;
        store.set(KEY_NOTES_MODE, flag_str(self.notes_mode))?;
        store.set(KEY_GHOST_MODE, flag_str(self.ghost_mode))?;
        store.set(KEY_SPECTATOR, &self.spectator_name)?;
        store.set(KEY_ACTIVATED, flag_str(self.activated))?;
        Ok(())
    }
}

fn flag_str(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

/// Accept the spellings earlier profile versions wrote ("true"/"1").
fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
