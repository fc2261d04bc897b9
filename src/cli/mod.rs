//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging and signal
//! setup, and one handler per subcommand.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod generate_cmd;
pub mod logging;
pub mod presenter;
pub mod run_cmd;
pub mod signals;
pub mod sound_cmd;
pub mod watch_cmd;

// Re-export commonly used types
pub use app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{AlertOptions, Cli, Commands, ConfigAction, SoundAction};
pub use presenter::Presenter;
