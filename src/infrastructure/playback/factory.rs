//! Player selection

use std::fmt;
use std::str::FromStr;

use crate::application::ports::Player;

use super::macos::MacPlayer;
use super::noop::NoOpPlayer;
use super::posix::PosixChainPlayer;
use super::rodio_player::RodioPlayer;
use super::windows::WindowsPlayer;

/// Platform-specific command-line players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemPlayer {
    /// PowerShell driving the Windows Media Player COM object
    Windows,
    /// afplay
    MacOs,
    /// paplay → aplay → ffplay → mpg123 → play
    PosixChain,
}

impl SystemPlayer {
    /// The player for the platform this binary was built for
    pub const fn detect() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::PosixChain
        }
    }
}

impl fmt::Display for SystemPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemPlayer::Windows => write!(f, "powershell"),
            SystemPlayer::MacOs => write!(f, "afplay"),
            SystemPlayer::PosixChain => write!(f, "posix-chain"),
        }
    }
}

/// User preference for how sounds are played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPreference {
    /// Spawn the platform's command-line player (default)
    #[default]
    System,
    /// Decode and play in-process with rodio
    Rodio,
    /// Never play anything
    None,
}

/// All accepted preference strings
pub const VALID_PLAYERS: &[&str] = &["system", "rodio", "none"];

impl fmt::Display for PlayerPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerPreference::System => write!(f, "system"),
            PlayerPreference::Rodio => write!(f, "rodio"),
            PlayerPreference::None => write!(f, "none"),
        }
    }
}

/// Error type for parsing player preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlayerError {
    pub value: String,
}

impl fmt::Display for ParsePlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid player '{}'. Valid options: {}",
            self.value,
            VALID_PLAYERS.join(", ")
        )
    }
}

impl std::error::Error for ParsePlayerError {}

impl FromStr for PlayerPreference {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(PlayerPreference::System),
            "rodio" => Ok(PlayerPreference::Rodio),
            "none" => Ok(PlayerPreference::None),
            _ => Err(ParsePlayerError {
                value: s.to_string(),
            }),
        }
    }
}

/// Create the player for `preference`. Called once at startup.
pub fn create_player(preference: PlayerPreference) -> Box<dyn Player> {
    match preference {
        PlayerPreference::System => create_system_player(SystemPlayer::detect()),
        PlayerPreference::Rodio => Box::new(RodioPlayer::new()),
        PlayerPreference::None => Box::new(NoOpPlayer::new()),
    }
}

/// Create a specific command-line player
pub fn create_system_player(kind: SystemPlayer) -> Box<dyn Player> {
    match kind {
        SystemPlayer::Windows => Box::new(WindowsPlayer::new()),
        SystemPlayer::MacOs => Box::new(MacPlayer::new()),
        SystemPlayer::PosixChain => Box::new(PosixChainPlayer::new()),
    }
}
