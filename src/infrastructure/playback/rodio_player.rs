//! Rodio-based player
//!
//! Decodes and plays the file in-process instead of spawning a player.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};

use crate::application::ports::{PlaybackError, Player};

/// Player implementation using rodio
pub struct RodioPlayer;

impl RodioPlayer {
    /// Create a new rodio-based player
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Player for RodioPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let path = path.to_path_buf();
        // Run audio playback in blocking thread to avoid blocking the async runtime
        tokio::task::spawn_blocking(move || play_file_sync(path))
            .await
            .map_err(|e| PlaybackError::PlaybackFailed(format!("Task join error: {}", e)))?
    }

    fn name(&self) -> &'static str {
        "rodio"
    }
}

/// Play a file synchronously (called from spawn_blocking)
fn play_file_sync(path: PathBuf) -> Result<(), PlaybackError> {
    let file = File::open(&path)
        .map_err(|_| PlaybackError::FileNotFound(path.display().to_string()))?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| PlaybackError::PlaybackFailed(format!("Cannot decode file: {}", e)))?;

    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| PlaybackError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| PlaybackError::PlaybackFailed(e.to_string()))?;

    sink.append(source);

    // Wait for playback to complete
    sink.sleep_until_end();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_reported() {
        let player = RodioPlayer::new();
        let err = player
            .play(Path::new("/definitely/not/here.wav"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlaybackError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn undecodable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"definitely not audio").unwrap();

        let err = RodioPlayer::new().play(&path).await.unwrap_err();
        assert!(matches!(err, PlaybackError::PlaybackFailed(_)));
    }

    // Note: This test requires audio hardware and may not work in CI
    #[tokio::test]
    #[ignore = "Requires audio hardware"]
    async fn can_play_generated_beep() {
        use crate::domain::tone::{synthesize, AudioClipSpec};
        use crate::domain::wav::{serialize, WavFormat};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error.wav");
        let spec = AudioClipSpec::error_beep();
        let bytes = serialize(&synthesize(&spec), WavFormat::mono(spec.sample_rate_hz()));
        std::fs::write(&path, bytes).unwrap();

        assert!(RodioPlayer::new().play(&path).await.is_ok());
    }
}
