//! Windows player driving the Windows Media Player COM object

use std::path::Path;

use async_trait::async_trait;
use base64::Engine;

use crate::application::ports::{PlaybackError, Player};

use super::command::PlayerCommand;

/// Longest the script waits for playback to stop, in 100ms ticks
const MAX_WAIT_TICKS: u32 = 600;

/// Plays through a hidden PowerShell running an encoded script
pub struct WindowsPlayer;

impl WindowsPlayer {
    pub fn new() -> Self {
        Self
    }

    /// The PowerShell invocation for `path`. The path is embedded in the
    /// script text, so it must be valid Unicode.
    pub fn command_for(path: &Path) -> Result<PlayerCommand, PlaybackError> {
        let path = path.to_str().ok_or_else(|| {
            PlaybackError::PlaybackFailed(format!(
                "path is not valid Unicode: {}",
                path.display()
            ))
        })?;
        Ok(PlayerCommand::new(
            "powershell",
            [
                "-NoProfile".to_string(),
                "-NonInteractive".to_string(),
                "-WindowStyle".to_string(),
                "Hidden".to_string(),
                "-EncodedCommand".to_string(),
                encode_command(&build_script(path)),
            ],
        ))
    }
}

impl Default for WindowsPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Player for WindowsPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        Self::command_for(path)?.run().await
    }

    fn name(&self) -> &'static str {
        "powershell"
    }
}

/// Script that plays `path` and waits until the player stops.
/// playState 1 is Stopped, 10 is Ready (the file could not be opened).
fn build_script(path: &str) -> String {
    let escaped = path.replace('\'', "''");
    format!(
        "$player = New-Object -ComObject WMPlayer.OCX\n\
         $player.URL = '{escaped}'\n\
         $player.controls.play()\n\
         Start-Sleep -Milliseconds 200\n\
         $ticks = 0\n\
         while ($player.playState -ne 1 -and $player.playState -ne 10 -and $ticks -lt {MAX_WAIT_TICKS}) {{ Start-Sleep -Milliseconds 100; $ticks++ }}\n\
         $player.close()\n"
    )
}

/// PowerShell's -EncodedCommand takes base64 of the UTF-16LE script
fn encode_command(script: &str) -> String {
    let utf16: Vec<u8> = script.encode_utf16().flat_map(u16::to_le_bytes).collect();
    base64::engine::general_purpose::STANDARD.encode(utf16)
}
