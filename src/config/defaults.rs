//! Compiled-in limits and defaults shared by the CLI and validation.

use std::env;
use std::path::PathBuf;

/// Largest forced-error quota worth staging; past this the bit drags.
pub const MAX_FORCED_ERRORS: u32 = 9;

/// Reference numbers are capped so the arithmetic stays readable on screen.
pub const MAX_REFERENCE_ABS: i64 = 999_999_999;

/// Spectator names longer than this wreck the notes layout.
pub const MAX_SPECTATOR_NAME_CHARS: usize = 48;

/// Debounce between the last digit and evaluation, the pause a real phone
/// takes before deciding.
pub const EVALUATE_DEBOUNCE_MS: u64 = 350;

/// How long the wrong-attempt shake cue stays on screen.
pub const SHAKE_MS: u64 = 600;

/// Default profile directory when `--profile-dir` is not given.
pub fn default_profile_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(env::temp_dir)
        .join("tricklock")
}
