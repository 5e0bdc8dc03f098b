//! tricklock entrypoint: a fake phone lockscreen for the terminal that
//! performs the subtraction trick.
//!
//! # Architecture
//!
//! - Input thread: reads key/mouse events into a bounded channel
//! - Event loop: single thread owning all state, driven by input and ticks
//! - App controller (library): settings, passcode session, gestures, timers

mod event_loop;
mod input;
mod settings_panel;
mod terminal;
mod ui;

use std::io;

use anyhow::{Context, Result};
use crossbeam_channel::bounded;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tricklock::config::AppConfig;
use tricklock::store::FileStore;
use tricklock::{
    init_logging, init_tracing, log_debug, log_file_path, tracing_log_path, App,
};

use crate::event_loop::run_event_loop;
use crate::input::spawn_input_thread;
use crate::settings_panel::SettingsPanel;
use crate::terminal::TerminalGuard;

/// Max pending input events before backpressure.
const INPUT_CHANNEL_CAPACITY: usize = 256;

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    if config.doctor {
        print_doctor_report(&config);
        return Ok(());
    }
    init_logging(&config);
    init_tracing(&config);
    log_debug("tricklock starting");

    let profile_dir = config
        .profile_dir
        .clone()
        .context("profile directory unresolved")?;
    let store = FileStore::open(&profile_dir)?;
    let mut app = App::new(Box::new(store), &config);
    let mut panel = SettingsPanel::new();

    let guard = TerminalGuard::new();
    guard.enter().context("failed to enter raw mode")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let _input_thread = spawn_input_thread(input_tx);

    let result = run_event_loop(&mut app, &mut panel, &input_rx, &mut terminal);
    drop(guard);
    log_debug("tricklock exiting");
    result
}

fn print_doctor_report(config: &AppConfig) {
    println!("tricklock {}", env!("CARGO_PKG_VERSION"));
    let profile = config
        .profile_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "unresolved".to_string());
    println!("profile_dir: {profile}");
    println!("debug_log: {}", log_file_path().display());
    println!("trace_log: {}", tracing_log_path().display());
    println!(
        "logs_enabled: {}",
        (config.logs || config.log_timings) && !config.no_logs
    );
    println!("code_length_seed: {}", display_seed(config.code_length));
    println!("reference_seed: {}", display_seed(config.reference));
    println!("forced_errors_seed: {}", display_seed(config.forced_errors));
}

fn display_seed<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unset".to_string())
}
