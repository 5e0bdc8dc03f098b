use super::defaults::{
    default_profile_dir, MAX_FORCED_ERRORS, MAX_REFERENCE_ABS, MAX_SPECTATOR_NAME_CHARS,
};
use super::AppConfig;
use crate::settings::CODE_LENGTHS;
use anyhow::{bail, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values and pin down the profile directory.
    pub fn validate(&mut self) -> Result<()> {
        if let Some(length) = self.code_length {
            if !CODE_LENGTHS.contains(&length) {
                bail!("--code-length must be 4 or 6, got {length}");
            }
        }

        if let Some(reference) = self.reference {
            if reference.abs() > MAX_REFERENCE_ABS {
                bail!(
                    "--reference must be within +/-{MAX_REFERENCE_ABS}, got {reference}"
                );
            }
        }

        if let Some(count) = self.forced_errors {
            if count > MAX_FORCED_ERRORS {
                bail!("--forced-errors must be at most {MAX_FORCED_ERRORS}, got {count}");
            }
        }

        if let Some(name) = &self.spectator_name {
            if name.chars().count() > MAX_SPECTATOR_NAME_CHARS {
                bail!(
                    "--spectator-name must be at most {MAX_SPECTATOR_NAME_CHARS} characters"
                );
            }
            if name.chars().any(char::is_control) {
                bail!("--spectator-name must not contain control characters");
            }
        }

        if self.profile_dir.is_none() {
            self.profile_dir = Some(default_profile_dir());
        }

        Ok(())
    }
}
