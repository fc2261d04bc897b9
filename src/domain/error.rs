//! Domain error types

use thiserror::Error;

/// Error when parsing a cooldown string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>ms, <number>s, <number>m, or a combination (e.g., 1200ms, 2s, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an audio clip description is out of range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipSpecError {
    #[error("Sample rate must be greater than zero")]
    ZeroSampleRate,

    #[error("Duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),

    #[error("Frequency must be a positive number of hertz, got {0}")]
    InvalidFrequency(f64),

    #[error("Peak amplitude must be within [0, 1], got {0}")]
    InvalidAmplitude(f64),

    #[error("Fade fraction must be within [0, 1), got {0}")]
    InvalidFadeFraction(f64),

    #[error("Clip of {samples} samples is too long for a WAV file")]
    TooLong { samples: u64 },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
