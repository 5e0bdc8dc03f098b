pub mod app;
pub mod background;
pub mod config;
pub mod gesture;
pub mod session;
pub mod settings;
pub mod store;
mod telemetry;
pub mod unlock;

pub use app::{
    crash_log_path, init_logging, log_debug, log_debug_content, log_file_path, log_panic, App,
    PromptKind, PromptState, Screen, TapEffect,
};
pub use telemetry::{init_tracing, tracing_log_path};
