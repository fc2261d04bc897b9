//! Default locations for files the application owns

use std::path::PathBuf;

/// Directory name used under the platform config, data and cache dirs
pub const APP_DIR: &str = "terminal-sound";

/// `<config_dir>/terminal-sound/config.toml`
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(APP_DIR)
        .join("config.toml")
}

/// `<data_dir>/terminal-sound/sounds/error.wav`, written by `generate`
pub fn default_sound_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join(APP_DIR)
        .join("sounds")
        .join("error.wav")
}

/// `<cache_dir>/terminal-sound/last-trigger`
pub fn trigger_state_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("~/.cache"))
        .join(APP_DIR)
        .join("last-trigger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_under_app_dir() {
        for path in [config_file_path(), default_sound_path(), trigger_state_path()] {
            assert!(path.components().any(|c| c.as_os_str() == APP_DIR));
        }
    }

    #[test]
    fn default_sound_is_a_wav() {
        let path = default_sound_path();
        assert_eq!(path.file_name().unwrap(), "error.wav");
        assert_eq!(path.parent().unwrap().file_name().unwrap(), "sounds");
    }
}
