//! Attempt evaluation: the arithmetic trick plus forced-error staging.
//!
//! Every full-length entry is classified up front as one tagged attempt kind
//! and then evaluated under that kind's rules, instead of branching on mode
//! flags mid-computation. The displayed "magic" number is always
//! `entered - reference`.

#[cfg(test)]
mod tests;
pub mod zodiac;

use crate::settings::Settings;

/// Classification chosen once per full-length entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// Staged rejection; `first` marks the attempt that tries the zodiac
    /// reveal.
    ForcedError { first: bool },
    /// The real unlock.
    Normal,
}

/// What a full-length entry produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Attempt was staged to fail: stay locked, show the shake cue.
    Rejected { reveal: String },
    /// The trick fired.
    Unlocked {
        result: i64,
        history: Vec<String>,
        sign: Option<&'static str>,
    },
    /// Activation is off: behave like an ordinary phone unlocking.
    Plain,
}

/// Per-lock-session evaluation state. Reset on every re-lock.
#[derive(Debug, Default)]
pub struct Evaluator {
    forced_seen: u32,
    history: Vec<String>,
    sign: Option<&'static str>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&self, settings: &Settings) -> Attempt {
        if self.forced_seen < settings.forced_errors {
            Attempt::ForcedError {
                first: self.forced_seen == 0,
            }
        } else {
            Attempt::Normal
        }
    }

    /// Evaluate a full-length code. `code` is guaranteed all-ASCII-digits by
    /// the session layer.
    pub fn evaluate(&mut self, code: &str, settings: &Settings) -> Outcome {
        match self.classify(settings) {
            Attempt::ForcedError { first } => {
                // Zodiac detection runs on the first staged failure only;
                // later ones record the raw digits.
                let reveal = match first.then(|| zodiac::sign_from_code(code)).flatten() {
                    Some(sign) => {
                        self.sign = Some(sign);
                        sign.to_string()
                    }
                    None => code.to_string(),
                };
                self.forced_seen += 1;
                self.history.push(reveal.clone());
                Outcome::Rejected { reveal }
            }
            Attempt::Normal => {
                if !settings.activated {
                    return Outcome::Plain;
                }
                let entered: i64 = code.parse().unwrap_or_default();
                Outcome::Unlocked {
                    result: entered - settings.reference_number,
                    history: self.history.clone(),
                    sign: self.sign,
                }
            }
        }
    }

    pub fn forced_seen(&self) -> u32 {
        self.forced_seen
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Forget the lock session: counters, history, and any detected sign.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Narrative shown instead of the bare number when notes mode is on.
pub fn notes_narrative(result: i64, settings: &Settings, sign: Option<&str>) -> String {
    let name = if settings.spectator_name.is_empty() {
        "my friend"
    } else {
        settings.spectator_name.as_str()
    };
    let mut text = format!(
        "Note to self: {name} will pick a number, and that number will be {result}."
    );
    if let Some(sign) = sign {
        text.push_str(&format!(" Bonus prediction: a {sign}."));
    }
    text
}
