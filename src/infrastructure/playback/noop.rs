//! No-op player
//!
//! Used when playback is turned off.

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{PlaybackError, Player};

/// Player that does nothing
pub struct NoOpPlayer;

impl NoOpPlayer {
    /// Create a new no-op player
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Player for NoOpPlayer {
    async fn play(&self, _path: &Path) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
