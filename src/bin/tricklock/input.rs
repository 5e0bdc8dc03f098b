//! Input thread: crossterm events become app-level [`InputEvent`]s.

use crossbeam_channel::Sender;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::thread;
use tricklock::log_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputEvent {
    Char(char),
    Backspace,
    Enter,
    Esc,
    Up,
    Down,
    Left,
    Right,
    /// Left button pressed; starts a potential swipe.
    MouseDown { y: u16 },
    /// Left button released; resolves to a tap or a swipe.
    MouseUp { x: u16, y: u16 },
    Resize,
    Exit,
}

pub(crate) fn spawn_input_thread(tx: Sender<InputEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        let raw = match event::read() {
            Ok(raw) => raw,
            Err(err) => {
                log_debug(&format!("input read error: {err}"));
                let _ = tx.send(InputEvent::Exit);
                return;
            }
        };
        let translated = match raw {
            Event::Key(key) => translate_key(key),
            Event::Mouse(mouse) => translate_mouse(mouse),
            Event::Resize(_, _) => Some(InputEvent::Resize),
            _ => None,
        };
        if let Some(event) = translated {
            if tx.send(event).is_err() {
                return;
            }
        }
    })
}

fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Exit)
        }
        KeyCode::Char(ch) => Some(InputEvent::Char(ch)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Esc => Some(InputEvent::Esc),
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        KeyCode::Left => Some(InputEvent::Left),
        KeyCode::Right => Some(InputEvent::Right),
        _ => None,
    }
}

fn translate_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::MouseDown { y: mouse.row }),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::MouseUp {
            x: mouse.column,
            y: mouse.row,
        }),
        _ => None,
    }
}
