//! Settings overlay: menu state and the edits each item applies.

use tricklock::{App, PromptKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingsItem {
    CodeLength,
    Reference,
    ForcedErrors,
    NotesMode,
    GhostMode,
    Activated,
    SpectatorName,
    Close,
}

pub(crate) const SETTINGS_ITEMS: [SettingsItem; 8] = [
    SettingsItem::CodeLength,
    SettingsItem::Reference,
    SettingsItem::ForcedErrors,
    SettingsItem::NotesMode,
    SettingsItem::GhostMode,
    SettingsItem::Activated,
    SettingsItem::SpectatorName,
    SettingsItem::Close,
];

impl SettingsItem {
    pub(crate) fn label(self) -> &'static str {
        match self {
            SettingsItem::CodeLength => "Passcode length",
            SettingsItem::Reference => "Reference number",
            SettingsItem::ForcedErrors => "Forced errors",
            SettingsItem::NotesMode => "Notes mode",
            SettingsItem::GhostMode => "Ghost mode",
            SettingsItem::Activated => "Trick active",
            SettingsItem::SpectatorName => "Spectator name",
            SettingsItem::Close => "Close",
        }
    }

    /// Current value as shown in the overlay.
    pub(crate) fn value_text(self, app: &App) -> String {
        let settings = app.settings();
        match self {
            SettingsItem::CodeLength => format!("{} digits", settings.code_length),
            SettingsItem::Reference => settings.reference_number.to_string(),
            SettingsItem::ForcedErrors => settings.forced_errors.to_string(),
            SettingsItem::NotesMode => on_off(settings.notes_mode),
            SettingsItem::GhostMode => on_off(settings.ghost_mode),
            SettingsItem::Activated => on_off(settings.activated),
            SettingsItem::SpectatorName => {
                if settings.spectator_name.is_empty() {
                    "(unset)".to_string()
                } else {
                    settings.spectator_name.clone()
                }
            }
            SettingsItem::Close => String::new(),
        }
    }
}

fn on_off(flag: bool) -> String {
    if flag { "on" } else { "off" }.to_string()
}

#[derive(Debug)]
pub(crate) struct SettingsPanel {
    open: bool,
    selected: usize,
    needs_redraw: bool,
}

impl SettingsPanel {
    pub(crate) fn new() -> Self {
        Self {
            open: false,
            selected: 0,
            needs_redraw: false,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn open(&mut self) {
        self.open = true;
        self.selected = 0;
        self.needs_redraw = true;
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
        self.needs_redraw = true;
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn selected_item(&self) -> SettingsItem {
        SETTINGS_ITEMS
            .get(self.selected)
            .copied()
            .unwrap_or(SettingsItem::Close)
    }

    pub(crate) fn move_up(&mut self) {
        if self.selected == 0 {
            self.selected = SETTINGS_ITEMS.len().saturating_sub(1);
        } else {
            self.selected -= 1;
        }
        self.needs_redraw = true;
    }

    pub(crate) fn move_down(&mut self) {
        self.selected = (self.selected + 1) % SETTINGS_ITEMS.len();
        self.needs_redraw = true;
    }

    /// Enter on the selected item.
    pub(crate) fn activate(&mut self, app: &mut App) {
        match self.selected_item() {
            SettingsItem::CodeLength => app.cycle_code_length(),
            SettingsItem::Reference => app.open_prompt(PromptKind::Reference),
            SettingsItem::ForcedErrors => app.adjust_forced_errors(1),
            SettingsItem::NotesMode => app.toggle_notes_mode(),
            SettingsItem::GhostMode => app.toggle_ghost_mode(),
            SettingsItem::Activated => app.toggle_activated(),
            SettingsItem::SpectatorName => app.open_prompt(PromptKind::SpectatorName),
            SettingsItem::Close => self.close(),
        }
        self.needs_redraw = true;
    }

    /// Left/right on the selected item.
    pub(crate) fn adjust(&mut self, app: &mut App, delta: i64) {
        match self.selected_item() {
            SettingsItem::CodeLength => app.cycle_code_length(),
            SettingsItem::ForcedErrors => app.adjust_forced_errors(delta),
            SettingsItem::NotesMode => app.toggle_notes_mode(),
            SettingsItem::GhostMode => app.toggle_ghost_mode(),
            SettingsItem::Activated => app.toggle_activated(),
            SettingsItem::Reference | SettingsItem::SpectatorName | SettingsItem::Close => {}
        }
        self.needs_redraw = true;
    }

    pub(crate) fn take_redraw(&mut self) -> bool {
        let requested = self.needs_redraw;
        self.needs_redraw = false;
        requested
    }
}
