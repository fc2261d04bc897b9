//! Playback infrastructure adapters
//!
//! Command-line players per platform, an in-process rodio player,
//! and a no-op player for when playback is turned off.

mod command;
mod factory;
mod macos;
mod noop;
mod posix;
mod rodio_player;
mod windows;

pub use command::PlayerCommand;
pub use factory::{
    create_player, create_system_player, ParsePlayerError, PlayerPreference, SystemPlayer,
    VALID_PLAYERS,
};
pub use macos::MacPlayer;
pub use noop::NoOpPlayer;
pub use posix::{default_chain, PosixChainPlayer};
pub use rodio_player::RodioPlayer;
pub use windows::WindowsPlayer;
