//! Shared wiring for the alerting commands

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::application::ports::{ConfigStore, Notifier, Player};
use crate::application::{AlertSettings, AlertUseCase};
use crate::domain::config::AppConfig;
use crate::infrastructure::paths::default_sound_path;
use crate::infrastructure::{create_notifier, create_player, PlayerPreference, XdgConfigStore};

use super::args::{AlertOptions, Cli};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the custom sound path
pub const SOUND_PATH_ENV: &str = "TERMINAL_SOUND_PATH";

/// The alert use case with the adapters chosen at startup
pub type Alerter = AlertUseCase<Box<dyn Player>, Box<dyn Notifier>>;

/// Config overrides given on the command line
pub fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        custom_sound_path: cli.sound.clone(),
        player: cli.player.clone(),
        cooldown: cli.cooldown.clone(),
        ..Default::default()
    }
}

/// Config overrides taken from the environment
pub fn env_config() -> AppConfig {
    AppConfig {
        custom_sound_path: env::var(SOUND_PATH_ENV).ok().filter(|s| !s.trim().is_empty()),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

/// Validate the merged config into options for the alerting commands
pub fn alert_options(config: &AppConfig) -> Result<AlertOptions, String> {
    let cooldown = config
        .cooldown_or_default()
        .map_err(|e| format!("Invalid cooldown: {}", e))?;

    let player = config
        .player_or_default()
        .parse::<PlayerPreference>()
        .map_err(|e| format!("Invalid player: {}", e))?;

    Ok(AlertOptions {
        enabled: config.enabled_or_default(),
        cooldown,
        policy: config.trigger_policy(),
        custom_sound: config.custom_sound_path(),
        player,
        notify: config.notify_or_default(),
    })
}

/// Build the alert use case for `options`
pub fn build_alerter(options: &AlertOptions) -> Alerter {
    build_alerter_with_default(options, default_sound_path())
}

/// Build the alert use case with an explicit fallback sound
pub fn build_alerter_with_default(options: &AlertOptions, default_sound: PathBuf) -> Alerter {
    let settings = AlertSettings {
        enabled: options.enabled,
        cooldown: options.cooldown,
        policy: options.policy.clone(),
        custom_sound: options.custom_sound.clone(),
        default_sound,
        notify: options.notify,
    };

    tracing::debug!(
        player = %options.player,
        cooldown = %options.cooldown,
        keyword_detection = options.policy.keyword_detection(),
        "alert settings"
    );

    AlertUseCase::new(create_player(options.player), create_notifier(), settings)
}

/// Wall-clock time in milliseconds since the Unix epoch
pub fn unix_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
