//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like audio players,
//! desktop notifications and the filesystem.

pub mod asset;
pub mod config;
pub mod notification;
pub mod paths;
pub mod playback;
pub mod state;

// Re-export adapters
pub use asset::FsAssetWriter;
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NotifyRustNotifier};
pub use playback::{create_player, PlayerPreference, VALID_PLAYERS};
pub use state::FileTriggerStateStore;
