//! Player port for playing alert sounds

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during sound playback
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("Sound file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to start {program}: {message}")]
    SpawnFailed { program: String, message: String },

    #[error("{program} exited with status: {status}")]
    PlayerFailed { program: String, status: String },

    #[error("No audio player available (tried: {0})")]
    NoPlayerAvailable(String),

    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for playing a sound file
#[async_trait]
pub trait Player: Send + Sync {
    /// Play the file at `path` and wait until playback ends.
    async fn play(&self, path: &Path) -> Result<(), PlaybackError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Blanket implementation for boxed player types
#[async_trait]
impl Player for Box<dyn Player> {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        self.as_ref().play(path).await
    }

    fn name(&self) -> &'static str {
        self.as_ref().name()
    }
}
