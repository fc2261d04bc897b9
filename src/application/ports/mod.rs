//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod asset;
pub mod config;
pub mod notifier;
pub mod player;
pub mod trigger_state;

// Re-export common types
pub use asset::{AssetError, AssetWriter};
pub use config::ConfigStore;
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use player::{PlaybackError, Player};
pub use trigger_state::{TriggerStateError, TriggerStateStore};
