//! Command-line parsing and validation helpers.

mod defaults;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use defaults::{
    default_profile_dir, EVALUATE_DEBOUNCE_MS, MAX_FORCED_ERRORS, MAX_REFERENCE_ABS,
    MAX_SPECTATOR_NAME_CHARS, SHAKE_MS,
};

/// CLI options for the tricklock TUI. Seed values apply only to profiles
/// that have never stored the matching key.
#[derive(Debug, Parser, Clone)]
#[command(about = "tricklock TUI", author, version)]
pub struct AppConfig {
    /// Profile directory holding settings and uploaded backgrounds
    #[arg(long = "profile-dir", env = "TRICKLOCK_PROFILE")]
    pub profile_dir: Option<PathBuf>,

    /// Seed passcode length for a fresh profile (4 or 6)
    #[arg(long = "code-length")]
    pub code_length: Option<u8>,

    /// Seed reference number for a fresh profile
    #[arg(long = "reference", allow_hyphen_values = true)]
    pub reference: Option<i64>,

    /// Seed count of staged wrong attempts for a fresh profile
    #[arg(long = "forced-errors")]
    pub forced_errors: Option<u32>,

    /// Start with notes mode enabled on a fresh profile
    #[arg(long = "notes-mode", default_value_t = false)]
    pub notes_mode: bool,

    /// Start with ghost mode enabled on a fresh profile
    #[arg(long = "ghost-mode", default_value_t = false)]
    pub ghost_mode: bool,

    /// Seed spectator name for a fresh profile
    #[arg(long = "spectator-name")]
    pub spectator_name: Option<String>,

    /// Print environment diagnostics and exit
    #[arg(long = "doctor", default_value_t = false)]
    pub doctor: bool,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "TRICKLOCK_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "TRICKLOCK_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Allow logging entered codes and reveals (debug log only)
    #[arg(
        long = "log-content",
        env = "TRICKLOCK_LOG_CONTENT",
        default_value_t = false
    )]
    pub log_content: bool,

    /// Enable verbose timing logs
    #[arg(long)]
    pub log_timings: bool,
}
