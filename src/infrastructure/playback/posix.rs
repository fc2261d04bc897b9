//! Player that walks a chain of command-line audio players

use std::ffi::OsStr;
use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{PlaybackError, Player};

use super::command::PlayerCommand;

/// Tries each known player in priority order until one succeeds
pub struct PosixChainPlayer {
    candidates: fn(&Path) -> Vec<PlayerCommand>,
}

impl PosixChainPlayer {
    /// Create a player using the standard chain:
    /// paplay → aplay → ffplay → mpg123 → play
    pub fn new() -> Self {
        Self {
            candidates: default_chain,
        }
    }

    /// Create a player with a custom chain
    pub fn with_chain(candidates: fn(&Path) -> Vec<PlayerCommand>) -> Self {
        Self { candidates }
    }
}

impl Default for PosixChainPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Player for PosixChainPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let mut tried = Vec::new();

        for command in (self.candidates)(path) {
            match command.run().await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!(error = %e, "player failed, trying next");
                    tried.push(command.program);
                }
            }
        }

        Err(PlaybackError::NoPlayerAvailable(tried.join(", ")))
    }

    fn name(&self) -> &'static str {
        "posix-chain"
    }
}

/// The standard fallback chain for `path`
pub fn default_chain(path: &Path) -> Vec<PlayerCommand> {
    let file = path.as_os_str();
    vec![
        PlayerCommand::new("paplay", [file]),
        PlayerCommand::new("aplay", [OsStr::new("-q"), file]),
        PlayerCommand::new(
            "ffplay",
            [
                OsStr::new("-nodisp"),
                OsStr::new("-autoexit"),
                OsStr::new("-loglevel"),
                OsStr::new("quiet"),
                file,
            ],
        ),
        PlayerCommand::new("mpg123", [OsStr::new("-q"), file]),
        PlayerCommand::new("play", [OsStr::new("-q"), file]),
    ]
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    #[test]
    fn chain_order_and_arguments() {
        let chain = default_chain(Path::new("/tmp/error.wav"));
        let programs: Vec<_> = chain.iter().map(|c| c.program).collect();
        assert_eq!(programs, vec!["paplay", "aplay", "ffplay", "mpg123", "play"]);
        assert!(chain
            .iter()
            .all(|c| c.args.last().map(|a| a.as_os_str()) == Some(OsStr::new("/tmp/error.wav"))));
        assert_eq!(chain[2].to_string(), "ffplay -nodisp -autoexit -loglevel quiet /tmp/error.wav");
    }

    fn all_missing(path: &Path) -> Vec<PlayerCommand> {
        vec![
            PlayerCommand::new("terminal-sound-missing-a", [path.as_os_str()]),
            PlayerCommand::new("terminal-sound-missing-b", [path.as_os_str()]),
        ]
    }

    #[tokio::test]
    async fn exhausted_chain_lists_what_was_tried() {
        let player = PosixChainPlayer::with_chain(all_missing);
        let err = player.play(Path::new("/tmp/error.wav")).await.unwrap_err();
        match err {
            PlaybackError::NoPlayerAvailable(tried) => {
                assert_eq!(tried, "terminal-sound-missing-a, terminal-sound-missing-b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    fn falls_through(_path: &Path) -> Vec<PlayerCommand> {
        vec![
            PlayerCommand::new("terminal-sound-missing-a", Vec::<OsString>::new()),
            PlayerCommand::new("false", Vec::<OsString>::new()),
            PlayerCommand::new("true", Vec::<OsString>::new()),
        ]
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_reaches_every_player() {
        use std::os::unix::ffi::OsStrExt;

        let file = OsStr::from_bytes(b"/tmp/beep\xff.wav");
        let chain = default_chain(Path::new(file));
        assert!(chain.iter().all(|c| c.args.last().map(|a| a.as_os_str()) == Some(file)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn falls_through_to_first_working_player() {
        let player = PosixChainPlayer::with_chain(falls_through);
        assert!(player.play(Path::new("/tmp/error.wav")).await.is_ok());
    }
}
