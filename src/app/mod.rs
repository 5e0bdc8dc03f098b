//! Application controller and debug logging.

mod logging;
mod state;

pub use logging::{
    crash_log_path, init_logging, log_debug, log_debug_content, log_file_path, log_panic,
};
pub use state::{App, PromptKind, PromptState, Screen, TapEffect};
