//! macOS player using afplay

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{PlaybackError, Player};

use super::command::PlayerCommand;

/// Plays through the built-in `afplay` command
pub struct MacPlayer;

impl MacPlayer {
    pub fn new() -> Self {
        Self
    }

    pub fn command_for(path: &Path) -> PlayerCommand {
        PlayerCommand::new("afplay", [path.as_os_str()])
    }
}

impl Default for MacPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Player for MacPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        Self::command_for(path).run().await
    }

    fn name(&self) -> &'static str {
        "afplay"
    }
}
