//! Core runtime loop: routes input events and drives the deadline timers.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam_channel::{select, Receiver};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tricklock::{App, Screen, TapEffect};

use crate::input::InputEvent;
use crate::settings_panel::SettingsPanel;
use crate::ui::{self, KeypadKey};

/// Tick cadence for timer deadlines (evaluation debounce, shake cue).
const TICK_MS: u64 = 50;

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub(crate) fn run_event_loop(
    app: &mut App,
    panel: &mut SettingsPanel,
    input_rx: &Receiver<InputEvent>,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<()> {
    let tick = Duration::from_millis(TICK_MS);
    ui::draw(terminal, app, panel)?;
    loop {
        select! {
            recv(input_rx) -> event => {
                let Ok(event) = event else { break };
                if route_event(app, panel, event, terminal)? == Flow::Exit {
                    break;
                }
            }
            default(tick) => {}
        }
        app.poll(Instant::now());
        if app.take_redraw_request() || panel.take_redraw() {
            ui::draw(terminal, app, panel)?;
        }
    }
    Ok(())
}

fn route_event(
    app: &mut App,
    panel: &mut SettingsPanel,
    event: InputEvent,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<Flow> {
    let now = Instant::now();
    match event {
        InputEvent::Exit => return Ok(Flow::Exit),
        InputEvent::Resize => app.request_redraw(),
        InputEvent::Esc => {
            // Esc peels one layer at a time: warning, prompt, panel, entry.
            if app.warning().is_some() {
                app.dismiss_warning();
            } else if app.prompt().is_some() {
                app.prompt_cancel();
            } else if panel.is_open() {
                panel.close();
            } else {
                app.clear_entry();
            }
        }
        event if app.prompt().is_some() => match event {
            InputEvent::Char(ch) => app.prompt_input(ch),
            InputEvent::Backspace => app.prompt_backspace(),
            InputEvent::Enter => app.prompt_submit(),
            _ => {}
        },
        event if panel.is_open() => match event {
            InputEvent::Up => panel.move_up(),
            InputEvent::Down => panel.move_down(),
            InputEvent::Left => panel.adjust(app, -1),
            InputEvent::Right => panel.adjust(app, 1),
            InputEvent::Enter => panel.activate(app),
            _ => {}
        },
        InputEvent::Char(ch) if ch.is_ascii_digit() => app.press_digit(ch, now),
        InputEvent::Backspace => app.delete_last(),
        InputEvent::MouseDown { y } => app.swipe_begin(y),
        InputEvent::MouseUp { x, y } => handle_release(app, panel, x, y, now, terminal)?,
        _ => {}
    }
    Ok(Flow::Continue)
}

/// A button release is a swipe when the drag travelled far enough, otherwise
/// a tap: keypad first, then every hidden zone, then ghost filling.
fn handle_release(
    app: &mut App,
    panel: &mut SettingsPanel,
    x: u16,
    y: u16,
    now: Instant,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<()> {
    if app.swipe_end(y) {
        return Ok(());
    }
    let size = terminal.size()?;
    let key = if app.screen() == Screen::Lock {
        ui::keypad_key_at(x, y, size)
    } else {
        None
    };
    match key {
        Some(KeypadKey::Digit(digit)) => app.press_digit(digit, now),
        Some(KeypadKey::Delete) => app.delete_last(),
        None => {}
    }
    if app.tap(x, y, size.width, size.height, now, key.is_some()) == TapEffect::OpenSettings {
        panel.open();
    }
    Ok(())
}
