//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::alert::{Cooldown, TriggerPolicy};
use crate::domain::tone::{
    DEFAULT_DURATION_SECS, DEFAULT_FADE_FRACTION, DEFAULT_FREQUENCY_HZ, DEFAULT_PEAK_AMPLITUDE,
    DEFAULT_SAMPLE_RATE_HZ,
};
use crate::infrastructure::PlayerPreference;

/// Terminal Sound - hear it when a command fails
#[derive(Parser, Debug)]
#[command(name = "terminal-sound")]
#[command(version)]
#[command(about = "Play an alert sound when a terminal command fails")]
#[command(long_about = None)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Sound file to play instead of the configured one
    #[arg(short = 's', long, value_name = "FILE", global = true)]
    pub sound: Option<String>,

    /// Player to use (system, rodio, none)
    #[arg(short = 'p', long, value_name = "PLAYER", global = true)]
    pub player: Option<String>,

    /// Minimum gap between alerts (e.g., 1500ms, 2s, 1m)
    #[arg(long, value_name = "TIME", global = true)]
    pub cooldown: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default alert sound as a WAV file
    Generate {
        /// Output path (defaults to the bundled sound location)
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Samples per second
        #[arg(long, value_name = "HZ", default_value_t = DEFAULT_SAMPLE_RATE_HZ)]
        sample_rate: u32,

        /// Length in seconds
        #[arg(short = 'd', long, value_name = "SECS", default_value_t = DEFAULT_DURATION_SECS)]
        duration: f64,

        /// Tone pitch in hertz
        #[arg(short = 'f', long, value_name = "HZ", default_value_t = DEFAULT_FREQUENCY_HZ)]
        frequency: f64,

        /// Peak amplitude between 0 and 1
        #[arg(long, value_name = "LEVEL", default_value_t = DEFAULT_PEAK_AMPLITUDE)]
        volume: f64,

        /// Share of the clip spent fading in and out, in [0, 1)
        #[arg(long, value_name = "FRACTION", default_value_t = DEFAULT_FADE_FRACTION)]
        fade: f64,
    },
    /// Run a command and play the alert if it fails
    Run {
        /// Name shown in logs instead of the command line
        #[arg(short = 'l', long, value_name = "LABEL")]
        label: Option<String>,

        /// Command and its arguments
        #[arg(
            value_name = "COMMAND",
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        command: Vec<String>,
    },
    /// Report an exit code from a shell hook (e.g., PROMPT_COMMAND)
    Hook {
        /// Exit code of the last command
        #[arg(allow_negative_numbers = true)]
        exit_code: i32,

        /// Name shown in logs
        #[arg(short = 'l', long, value_name = "LABEL")]
        label: Option<String>,
    },
    /// Read events from stdin until EOF or Ctrl-C
    ///
    /// Lines of the form `exit <code> [label]` report a finished command.
    /// Any other line is treated as terminal output.
    Watch {
        /// Also alert on output lines containing error keywords
        #[arg(short = 'k', long)]
        keywords: bool,
    },
    /// Manage the alert sound
    Sound {
        #[command(subcommand)]
        action: SoundAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sound action subcommands
#[derive(Subcommand, Debug)]
pub enum SoundAction {
    /// Use a custom sound file (mp3, wav or ogg)
    Set {
        /// Path to the sound file
        path: PathBuf,
    },
    /// Go back to the default sound
    Clear,
    /// Play the current sound now
    Test,
    /// Show which sound file will be played
    Path,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed alert options, after merging config sources
#[derive(Debug, Clone)]
pub struct AlertOptions {
    pub enabled: bool,
    pub cooldown: Cooldown,
    pub policy: TriggerPolicy,
    pub custom_sound: Option<PathBuf>,
    pub player: PlayerPreference,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "enabled",
    "cooldown",
    "custom_sound_path",
    "error_keywords",
    "keyword_detection",
    "player",
    "notify",
];

/// Sound file extensions accepted by `sound set`
pub const SUPPORTED_SOUND_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
