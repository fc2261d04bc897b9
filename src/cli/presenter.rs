//! CLI presenter for output formatting

use colored::*;

use crate::application::GenerateOutput;

/// Presenter for CLI output formatting
#[derive(Debug, Default, Clone, Copy)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// One-line summary of a generated sound
    pub fn format_generated(
        &self,
        output: &GenerateOutput,
        duration_secs: f64,
        frequency_hz: f64,
    ) -> String {
        format!(
            "Generated: {} ({} bytes, {}s @ {}Hz)",
            output.path.display(),
            output.byte_len,
            duration_secs,
            frequency_hz
        )
    }
}
