use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::background::{Backgrounds, Placement, Slot};
use crate::config::{
    AppConfig, EVALUATE_DEBOUNCE_MS, MAX_FORCED_ERRORS, MAX_REFERENCE_ABS,
    MAX_SPECTATOR_NAME_CHARS, SHAKE_MS,
};
use crate::gesture::{GestureEvent, GestureMap};
use crate::session::{Entry, LockState, PasscodeSession};
use crate::settings::{self, Settings};
use crate::store::KvStore;
use crate::unlock::{Evaluator, Outcome};
use crate::{log_debug, log_debug_content};

/// Which screen the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Lock,
    Home,
    Notes,
}

/// Inline prompts opened by the hidden controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Reference,
    BackgroundPath(Slot),
    SpectatorName,
}

#[derive(Debug)]
pub struct PromptState {
    pub kind: PromptKind,
    pub buffer: String,
}

impl PromptKind {
    pub fn title(self) -> String {
        match self {
            PromptKind::Reference => "Set reference number".to_string(),
            PromptKind::BackgroundPath(slot) => {
                format!("Image path for the {} backdrop", slot.label())
            }
            PromptKind::SpectatorName => "Spectator name".to_string(),
        }
    }
}

/// What a tap asked the front end to do beyond internal state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum TapEffect {
    None,
    OpenSettings,
}

/// Central application state: settings, the passcode session, evaluation,
/// gestures, and backdrop slots all hang off this one controller.
pub struct App {
    store: Box<dyn KvStore>,
    settings: Settings,
    session: PasscodeSession,
    evaluator: Evaluator,
    gestures: GestureMap,
    backgrounds: Backgrounds,
    outcome: Option<Outcome>,
    status: String,
    warning: Option<String>,
    prompt: Option<PromptState>,
    evaluate_at: Option<Instant>,
    shake_until: Option<Instant>,
    shaking: bool,
    needs_redraw: bool,
}

impl App {
    /// Build the controller from a persistence store, seeding fresh
    /// profiles from CLI overrides.
    pub fn new(mut store: Box<dyn KvStore>, config: &AppConfig) -> Self {
        let seeded = seed_fresh_profile(&mut *store, config);
        let settings = Settings::load(&*store);
        if seeded {
            log_debug("seeded fresh profile from CLI overrides");
        }
        let session = PasscodeSession::new(settings.code_length);
        Self {
            store,
            settings,
            session,
            evaluator: Evaluator::new(),
            gestures: GestureMap::standard(),
            backgrounds: Backgrounds::new(),
            outcome: None,
            status: String::new(),
            warning: None,
            prompt: None,
            evaluate_at: None,
            shake_until: None,
            shaking: false,
            needs_redraw: true,
        }
    }

    // ── accessors for the renderer ─────────────────────────────────────

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &PasscodeSession {
        &self.session
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn prompt(&self) -> Option<&PromptState> {
        self.prompt.as_ref()
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn screen(&self) -> Screen {
        if self.session.state() != LockState::Unlocked {
            return Screen::Lock;
        }
        match self.outcome {
            Some(Outcome::Unlocked { .. }) if self.settings.notes_mode => Screen::Notes,
            _ => Screen::Home,
        }
    }

    pub fn has_custom_background(&self, slot: Slot) -> bool {
        self.backgrounds.is_custom(slot, &*self.store)
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn take_redraw_request(&mut self) -> bool {
        let requested = self.needs_redraw;
        self.needs_redraw = false;
        requested
    }

    // ── keypad input ───────────────────────────────────────────────────

    pub fn press_digit(&mut self, digit: char, now: Instant) {
        match self.session.append_digit(digit) {
            Entry::Accepted => self.request_redraw(),
            Entry::Completed => {
                // UI debounce before the verdict, like a real phone pausing.
                self.evaluate_at = Some(now + Duration::from_millis(EVALUATE_DEBOUNCE_MS));
                self.request_redraw();
            }
            Entry::Ignored => {}
        }
    }

    pub fn clear_entry(&mut self) {
        self.session.clear();
        self.evaluate_at = None;
        self.request_redraw();
    }

    pub fn delete_last(&mut self) {
        self.session.delete_last();
        self.request_redraw();
    }

    pub fn dismiss_warning(&mut self) {
        if self.warning.take().is_some() {
            self.request_redraw();
        }
    }

    // ── taps and swipes ────────────────────────────────────────────────

    /// Route one screen tap through every hidden control, then apply ghost
    /// filling. `on_keypad` marks taps that landed on a keypad key, which
    /// never ghost-fill (the real key press already counted).
    pub fn tap(
        &mut self,
        x: u16,
        y: u16,
        cols: u16,
        rows: u16,
        now: Instant,
        on_keypad: bool,
    ) -> TapEffect {
        let unlocked = self.session.state() == LockState::Unlocked;
        let mut effect = TapEffect::None;
        for event in self.gestures.on_tap(x, y, cols, rows, now, unlocked) {
            match event {
                GestureEvent::PickLockBackground => {
                    self.open_prompt(PromptKind::BackgroundPath(Slot::Lock));
                }
                GestureEvent::PickHomeBackground => {
                    self.open_prompt(PromptKind::BackgroundPath(Slot::Home));
                }
                GestureEvent::OpenSettings => effect = TapEffect::OpenSettings,
                GestureEvent::Relock => self.relock(),
                GestureEvent::SetReference => {
                    self.open_prompt(PromptKind::Reference);
                }
            }
        }
        if !on_keypad {
            self.ghost_fill();
        }
        effect
    }

    pub fn swipe_begin(&mut self, y: u16) {
        self.gestures.swipe.begin(y);
    }

    /// Finish a drag. Returns true when it registered as a swipe (and the
    /// reference prompt opened); false releases should be treated as taps.
    pub fn swipe_end(&mut self, end_y: u16) -> bool {
        if self.gestures.on_swipe_end(end_y).is_some() {
            self.open_prompt(PromptKind::Reference);
            true
        } else {
            false
        }
    }

    /// Ghost mode: background taps quietly stack random digits, stopping
    /// one short of a full code so only a real key press completes it.
    fn ghost_fill(&mut self) {
        if !self.settings.ghost_mode || self.session.state() != LockState::Locked {
            return;
        }
        if self.session.filled() + 1 >= self.session.capacity() {
            return;
        }
        let digit = char::from(b'0' + rand::thread_rng().gen_range(0..=9u8));
        let _ = self.session.append_digit(digit);
        self.request_redraw();
    }

    // ── timers ─────────────────────────────────────────────────────────

    /// Advance deadline-driven work: the evaluation debounce and the shake
    /// cue. Timers are replaced, never queued.
    pub fn poll(&mut self, now: Instant) {
        if let Some(deadline) = self.evaluate_at {
            if now >= deadline {
                self.evaluate_at = None;
                self.run_evaluation(now);
            }
        }
        if let Some(deadline) = self.shake_until {
            if now >= deadline {
                self.shake_until = None;
                self.shaking = false;
                self.status.clear();
                self.request_redraw();
            }
        }
    }

    fn run_evaluation(&mut self, now: Instant) {
        let Some(code) = self.session.pending_code().map(str::to_string) else {
            // Cleared during the debounce; nothing to judge.
            return;
        };
        log_debug_content(&format!("evaluating code {code}"));
        match self.evaluator.evaluate(&code, &self.settings) {
            Outcome::Rejected { reveal } => {
                log_debug_content(&format!("staged rejection, reveal '{reveal}'"));
                self.session.reject();
                self.shake_until = Some(now + Duration::from_millis(SHAKE_MS));
                self.shaking = true;
                self.status = "Wrong passcode".to_string();
            }
            outcome => {
                log_debug("session unlocked");
                self.session.unlock();
                self.outcome = Some(outcome);
                self.status.clear();
            }
        }
        self.request_redraw();
    }

    /// Back to the lockscreen; the trick state starts over.
    pub fn relock(&mut self) {
        self.session.relock(self.settings.code_length);
        self.evaluator.reset();
        self.outcome = None;
        self.evaluate_at = None;
        self.status.clear();
        self.request_redraw();
    }

    // ── prompts ────────────────────────────────────────────────────────

    pub fn open_prompt(&mut self, kind: PromptKind) {
        let buffer = match kind {
            PromptKind::Reference => self.settings.reference_number.to_string(),
            PromptKind::SpectatorName => self.settings.spectator_name.clone(),
            PromptKind::BackgroundPath(_) => String::new(),
        };
        self.prompt = Some(PromptState { kind, buffer });
        self.request_redraw();
    }

    pub fn prompt_input(&mut self, ch: char) {
        if let Some(prompt) = self.prompt.as_mut() {
            if !ch.is_control() && prompt.buffer.len() < 256 {
                prompt.buffer.push(ch);
                self.request_redraw();
            }
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.buffer.pop();
            self.request_redraw();
        }
    }

    pub fn prompt_cancel(&mut self) {
        if self.prompt.take().is_some() {
            self.request_redraw();
        }
    }

    pub fn prompt_submit(&mut self) {
        let Some(PromptState { kind, buffer }) = self.prompt.take() else {
            return;
        };
        match kind {
            PromptKind::Reference => self.apply_reference_edit(buffer.trim()),
            PromptKind::SpectatorName => self.apply_spectator_edit(buffer.trim()),
            PromptKind::BackgroundPath(slot) => self.apply_background(slot, buffer.trim()),
        }
        self.request_redraw();
    }

    /// Non-numeric or out-of-range edits are dropped and the previous value
    /// stays in force.
    fn apply_reference_edit(&mut self, raw: &str) {
        match raw.parse::<i64>() {
            Ok(value) if value.abs() <= MAX_REFERENCE_ABS => {
                self.settings.reference_number = value;
                self.persist_settings();
                self.status = "Reference number updated".to_string();
            }
            _ => {
                self.status = "Not a usable number; kept the old one".to_string();
            }
        }
    }

    fn apply_spectator_edit(&mut self, raw: &str) {
        if raw.chars().count() > MAX_SPECTATOR_NAME_CHARS {
            self.status = "Name too long; kept the old one".to_string();
            return;
        }
        self.settings.spectator_name = raw.to_string();
        self.persist_settings();
    }

    fn apply_background(&mut self, slot: Slot, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let path = PathBuf::from(raw);
        match self
            .backgrounds
            .install_from_file(slot, &path, &mut *self.store)
        {
            Ok(Placement::Persisted) => {
                self.status = format!("Backdrop set for the {}", slot.label());
            }
            Ok(Placement::MemoryOnly) => {
                self.warning = Some(format!(
                    "Image too large to save; the {} backdrop lasts until quit",
                    slot.label()
                ));
            }
            Err(err) => {
                log_debug(&format!("background install failed: {err:#}"));
                self.warning = Some(format!("Could not load that image: {err}"));
            }
        }
    }

    // ── settings edits (driven by the settings panel) ──────────────────

    pub fn cycle_code_length(&mut self) {
        self.settings.code_length = if self.settings.code_length == 4 { 6 } else { 4 };
        self.session.set_code_length(self.settings.code_length);
        self.evaluate_at = None;
        self.persist_settings();
    }

    pub fn adjust_forced_errors(&mut self, delta: i64) {
        let current = i64::from(self.settings.forced_errors);
        let next = (current + delta).clamp(0, i64::from(MAX_FORCED_ERRORS));
        self.settings.forced_errors = next as u32;
        self.persist_settings();
    }

    pub fn toggle_notes_mode(&mut self) {
        self.settings.notes_mode = !self.settings.notes_mode;
        self.persist_settings();
    }

    pub fn toggle_ghost_mode(&mut self) {
        self.settings.ghost_mode = !self.settings.ghost_mode;
        self.persist_settings();
    }

    pub fn toggle_activated(&mut self) {
        self.settings.activated = !self.settings.activated;
        self.persist_settings();
    }

    /// Write-through on every edit; a failed write becomes a banner, never
    /// a crash.
    fn persist_settings(&mut self) {
        if let Err(err) = self.settings.save(&mut *self.store) {
            log_debug(&format!("settings save failed: {err}"));
            self.warning = Some(format!("Settings not saved: {err}"));
        }
        self.request_redraw();
    }
}

/// Apply CLI seed values for keys the profile has never stored. Returns
/// true when anything was seeded.
fn seed_fresh_profile(store: &mut dyn KvStore, config: &AppConfig) -> bool {
    let mut seeded = false;
    let mut seed = |key: &str, value: Option<String>, store: &mut dyn KvStore| {
        if let Some(value) = value {
            if store.get(key).is_none() && store.set(key, &value).is_ok() {
                seeded = true;
            }
        }
    };
    seed(
        settings::KEY_CODE_LENGTH,
        config.code_length.map(|n| n.to_string()),
        store,
    );
    seed(
        settings::KEY_REFERENCE,
        config.reference.map(|n| n.to_string()),
        store,
    );
    seed(
        settings::KEY_FORCED_ERRORS,
        config.forced_errors.map(|n| n.to_string()),
        store,
    );
    seed(
        settings::KEY_NOTES_MODE,
        config.notes_mode.then(|| "true".to_string()),
        store,
    );
    seed(
        settings::KEY_GHOST_MODE,
        config.ghost_mode.then(|| "true".to_string()),
        store,
    );
    seed(settings::KEY_SPECTATOR, config.spectator_name.clone(), store);
    seeded
}
