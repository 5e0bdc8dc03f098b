//! Screen rendering: lockscreen, home, notes, prompt, and overlays.
//!
//! Layout math for the keypad lives here too so hit-testing and drawing can
//! never disagree about where a key is.

use std::io::Stdout;

use anyhow::Result;
use chrono::Local;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use unicode_width::UnicodeWidthStr;

use tricklock::background::Slot;
use tricklock::unlock::{notes_narrative, Outcome};
use tricklock::{App, PromptState, Screen};

use crate::settings_panel::{SettingsPanel, SETTINGS_ITEMS};

const KEY_W: u16 = 8;
const KEY_H: u16 = 3;
const KEYPAD_W: u16 = KEY_W * 3;
const KEYPAD_H: u16 = KEY_H * 4;

/// Keypad rows: digit plus the letter group real phones print under it.
const KEYPAD_LABELS: [[(&str, &str); 3]; 4] = [
    [("1", ""), ("2", "ABC"), ("3", "DEF")],
    [("4", "GHI"), ("5", "JKL"), ("6", "MNO")],
    [("7", "PQRS"), ("8", "TUV"), ("9", "WXYZ")],
    [("", ""), ("0", ""), ("⌫", "")],
];

/// What a keypad cell resolves to when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeypadKey {
    Digit(char),
    Delete,
}

struct LockLayout {
    clock: Rect,
    status: Rect,
    dots: Rect,
    keypad: Rect,
    footer: Rect,
}

fn lock_layout(area: Rect) -> LockLayout {
    let keypad_x = area.x + area.width.saturating_sub(KEYPAD_W) / 2;
    LockLayout {
        clock: Rect::new(area.x, area.y + 1, area.width, 2),
        status: Rect::new(area.x, area.y + 4, area.width, 1),
        dots: Rect::new(area.x, area.y + 5, area.width, 1),
        keypad: Rect::new(keypad_x, area.y + 7, KEYPAD_W, KEYPAD_H),
        footer: Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1),
    }
}

/// Map a screen position to a keypad key, if it lands on one.
pub(crate) fn keypad_key_at(x: u16, y: u16, area: Rect) -> Option<KeypadKey> {
    let keypad = lock_layout(area).keypad;
    if x < keypad.x || x >= keypad.right() || y < keypad.y || y >= keypad.bottom() {
        return None;
    }
    let col = ((x - keypad.x) / KEY_W) as usize;
    let row = ((y - keypad.y) / KEY_H) as usize;
    match (row, col) {
        (0..=2, 0..=2) => {
            let digit = b'1' + (row as u8) * 3 + col as u8;
            Some(KeypadKey::Digit(char::from(digit)))
        }
        (3, 1) => Some(KeypadKey::Digit('0')),
        (3, 2) => Some(KeypadKey::Delete),
        _ => None,
    }
}

pub(crate) fn draw(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &App,
    panel: &SettingsPanel,
) -> Result<()> {
    terminal.draw(|frame| {
        match app.screen() {
            Screen::Lock => draw_lock(frame, app),
            Screen::Home => draw_home(frame, app),
            Screen::Notes => draw_notes(frame, app),
        }
        if panel.is_open() {
            draw_panel(frame, app, panel);
        }
        if let Some(prompt) = app.prompt() {
            draw_prompt(frame, prompt);
        }
        if let Some(warning) = app.warning() {
            draw_warning(frame, warning);
        }
    })?;
    Ok(())
}

fn backdrop_style(custom: bool) -> Style {
    // A real image cannot render in cells; a custom backdrop shows as a tint
    // so the performer can confirm the upload took.
    if custom {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

fn draw_lock(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let layout = lock_layout(area);
    let style = backdrop_style(app.has_custom_background(Slot::Lock));

    let clock = Paragraph::new(vec![
        Line::from(Span::styled(
            Local::now().format("%H:%M").to_string(),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            Local::now().format("%A, %B %e").to_string(),
            style,
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(clock, layout.clock.intersection(area));

    if app.is_shaking() {
        let status = Paragraph::new(app.status().to_string())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(status, layout.status.intersection(area));
    } else if !app.status().is_empty() {
        let status = Paragraph::new(app.status().to_string())
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(status, layout.status.intersection(area));
    }

    frame.render_widget(dots_line(app), layout.dots.intersection(area));
    draw_keypad(frame, layout.keypad, area);

    let delete_label = if app.session().filled() > 0 {
        "Delete"
    } else {
        "Cancel"
    };
    let width = layout.footer.width as usize;
    let gap = width
        .saturating_sub("Emergency".width() + delete_label.width() + 8)
        .max(1);
    let footer = Paragraph::new(format!(
        "    Emergency{}{delete_label}    ",
        " ".repeat(gap)
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, layout.footer.intersection(area));
}

fn dots_line(app: &App) -> Paragraph<'static> {
    let filled = app.session().filled();
    let capacity = app.session().capacity();
    let mut dots = String::new();
    for i in 0..capacity {
        dots.push(if i < filled { '●' } else { '○' });
        if i + 1 < capacity {
            dots.push(' ');
        }
    }
    let style = if app.is_shaking() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Paragraph::new(dots)
        .style(style)
        .alignment(Alignment::Center)
}

fn draw_keypad(frame: &mut Frame, keypad: Rect, area: Rect) {
    for (row, keys) in KEYPAD_LABELS.iter().enumerate() {
        for (col, (digit, letters)) in keys.iter().enumerate() {
            if digit.is_empty() {
                continue;
            }
            let cell = Rect::new(
                keypad.x + col as u16 * KEY_W,
                keypad.y + row as u16 * KEY_H,
                KEY_W,
                KEY_H,
            )
            .intersection(area);
            if cell.width == 0 || cell.height == 0 {
                continue;
            }
            let key = Paragraph::new(vec![
                Line::from(Span::styled(
                    digit.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    letters.to_string(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(key, cell);
        }
    }
}

fn draw_home(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let style = backdrop_style(app.has_custom_background(Slot::Home));

    let clock = Paragraph::new(Local::now().format("%H:%M").to_string())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(clock, Rect::new(area.x, area.y, area.width, 1).intersection(area));

    let mut lines: Vec<Line> = Vec::new();
    match app.outcome() {
        Some(Outcome::Unlocked {
            result, history, ..
        }) => {
            lines.push(Line::from(Span::styled(
                result.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            if !history.is_empty() {
                lines.push(Line::from(""));
                for (index, reveal) in history.iter().enumerate() {
                    lines.push(Line::from(Span::styled(
                        format!("attempt {}: {reveal}", index + 1),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }
        _ => {
            lines.push(Line::from(Span::styled("Welcome back.", style)));
        }
    }
    let center_height = lines.len() as u16;
    let center_y = area.y + (area.height.saturating_sub(center_height)) / 2;
    let center =
        Rect::new(area.x, center_y, area.width, center_height.max(1)).intersection(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center,
    );

    let dock = Paragraph::new("Phone     Mail     Camera     Notes")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(
        dock,
        Rect::new(area.x, area.bottom().saturating_sub(2), area.width, 1).intersection(area),
    );
}

fn draw_notes(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let Some(Outcome::Unlocked { result, sign, .. }) = app.outcome() else {
        return;
    };
    let text = notes_narrative(*result, app.settings(), *sign);
    let style = backdrop_style(app.has_custom_background(Slot::Notes));
    let body = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Notes ")
                .title_alignment(Alignment::Center),
        );
    let inner = centered_rect(area, area.width.saturating_sub(8).min(52), 8);
    frame.render_widget(body, inner);
}

fn draw_prompt(frame: &mut Frame, prompt: &PromptState) {
    let area = frame.size();
    let rect = Rect::new(
        area.x + 2,
        area.bottom().saturating_sub(4),
        area.width.saturating_sub(4),
        3,
    )
    .intersection(area);
    frame.render_widget(Clear, rect);
    let body = Paragraph::new(format!("> {}_", prompt.buffer)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", prompt.kind.title())),
    );
    frame.render_widget(body, rect);
}

fn draw_panel(frame: &mut Frame, app: &App, panel: &SettingsPanel) {
    let area = frame.size();
    let height = SETTINGS_ITEMS.len() as u16 + 4;
    let rect = centered_rect(area, area.width.saturating_sub(8).min(44), height);
    frame.render_widget(Clear, rect);

    let label_width = SETTINGS_ITEMS
        .iter()
        .map(|item| item.label().width())
        .max()
        .unwrap_or(0);
    let mut lines: Vec<Line> = Vec::new();
    for (index, item) in SETTINGS_ITEMS.iter().enumerate() {
        let selected = index == panel.selected();
        let marker = if selected { "> " } else { "  " };
        let label = format!("{marker}{:<label_width$}", item.label());
        let value = item.value_text(app);
        let style = if selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(label, style),
            Span::raw("  "),
            Span::styled(value, style.fg(Color::Cyan)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑↓ select   ←→ adjust   Enter apply   Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(body, rect);
}

fn draw_warning(frame: &mut Frame, warning: &str) {
    let area = frame.size();
    let rect = Rect::new(area.x, area.y, area.width, 1).intersection(area);
    frame.render_widget(Clear, rect);
    let banner = Paragraph::new(format!("{warning} (Esc to dismiss)"))
        .style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rect);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
