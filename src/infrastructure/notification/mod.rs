//! Notification infrastructure module
//!
//! Desktop notifications through notify-rust, which covers
//! Windows, macOS and freedesktop-compatible Linux desktops.

mod notify_rust;

pub use notify_rust::NotifyRustNotifier;

use crate::application::ports::Notifier;

/// Create the default notifier for the current platform
pub fn create_notifier() -> Box<dyn Notifier> {
    Box::new(NotifyRustNotifier::new())
}
