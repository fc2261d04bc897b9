//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::alert::Cooldown;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::{PlayerPreference, VALID_PLAYERS};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    let value = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
    presenter.output(&value);

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };
    let bool_value = || {
        parse_bool(value).map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))
    };

    match key {
        "enabled" => config.enabled = Some(bool_value()?),
        "keyword_detection" => config.keyword_detection = Some(bool_value()?),
        "notify" => config.notify = Some(bool_value()?),
        "cooldown" => {
            let cooldown = value
                .parse::<Cooldown>()
                .map_err(|e| invalid(e.to_string()))?;
            config.cooldown = Some(cooldown.to_string());
        }
        "custom_sound_path" => {
            let trimmed = value.trim();
            config.custom_sound_path = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
        "error_keywords" => {
            let keywords = parse_keywords(value);
            if keywords.is_empty() {
                return Err(invalid(
                    "Provide a comma-separated list of keywords".to_string(),
                ));
            }
            config.error_keywords = Some(keywords);
        }
        "player" => {
            let player = value.parse::<PlayerPreference>().map_err(|_| {
                invalid(format!(
                    "Invalid value '{}'. Valid options: {}",
                    value,
                    VALID_PLAYERS.join(", ")
                ))
            })?;
            config.player = Some(player.to_string());
        }
        _ => unreachable!(), // Already validated
    }

    Ok(())
}

/// Current value of `key` formatted for display
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "enabled" => config.enabled.map(|b| b.to_string()),
        "cooldown" => config.cooldown.clone(),
        "custom_sound_path" => config.custom_sound_path.clone(),
        "error_keywords" => config.error_keywords.as_ref().map(|k| k.join(", ")),
        "keyword_detection" => config.keyword_detection.map(|b| b.to_string()),
        "player" => config.player.clone(),
        "notify" => config.notify.map(|b| b.to_string()),
        _ => None,
    }
}

/// Split a comma-separated keyword list, dropping blanks
fn parse_keywords(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;
    use tempfile::TempDir;

    fn set(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
        apply_value(config, key, value)
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("YES"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("off"), Ok(false));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn parse_keywords_trims_and_drops_blanks() {
        assert_eq!(
            parse_keywords(" error, panicked ,, FATAL "),
            vec!["error", "panicked", "FATAL"]
        );
        assert!(parse_keywords(" , ").is_empty());
    }

    #[test]
    fn cooldown_is_normalized() {
        let mut config = AppConfig::empty();
        set(&mut config, "cooldown", "1500ms").unwrap();
        assert_eq!(config.cooldown, Some("1500ms".to_string()));

        set(&mut config, "cooldown", "3000ms").unwrap();
        assert_eq!(config.cooldown, Some("3s".to_string()));
    }

    #[test]
    fn cooldown_invalid() {
        let mut config = AppConfig::empty();
        let err = set(&mut config, "cooldown", "soon").unwrap_err();
        assert!(err.to_string().contains("cooldown"));
        assert!(config.cooldown.is_none());
    }

    #[test]
    fn player_valid_and_invalid() {
        let mut config = AppConfig::empty();
        set(&mut config, "player", "Rodio").unwrap();
        assert_eq!(config.player, Some("rodio".to_string()));

        let err = set(&mut config, "player", "winamp").unwrap_err();
        assert!(err.to_string().contains("system, rodio, none"));
    }

    #[test]
    fn bools_reject_garbage() {
        let mut config = AppConfig::empty();
        assert!(set(&mut config, "enabled", "sometimes").is_err());
        set(&mut config, "keyword_detection", "yes").unwrap();
        assert_eq!(config.keyword_detection, Some(true));
    }

    #[test]
    fn blank_custom_sound_clears_it() {
        let mut config = AppConfig {
            custom_sound_path: Some("/old.wav".to_string()),
            ..Default::default()
        };
        set(&mut config, "custom_sound_path", "  ").unwrap();
        assert!(config.custom_sound_path.is_none());
    }

    #[test]
    fn empty_keywords_rejected() {
        let mut config = AppConfig::empty();
        assert!(set(&mut config, "error_keywords", ",").is_err());
        set(&mut config, "error_keywords", "boom, oops").unwrap();
        assert_eq!(
            display_value(&config, "error_keywords"),
            Some("boom, oops".to_string())
        );
    }

    #[test]
    fn unknown_key_rejected() {
        let err = ensure_valid_key("api_key").unwrap_err();
        assert!(err.to_string().contains("Unknown key"));
    }

    #[test]
    fn display_covers_every_key() {
        let config = AppConfig::defaults();
        for key in VALID_CONFIG_KEYS {
            if *key == "custom_sound_path" {
                assert!(display_value(&config, key).is_none());
            } else {
                assert!(display_value(&config, key).is_some(), "{}", key);
            }
        }
    }

    #[tokio::test]
    async fn set_persists_through_store() {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_config_command(
            ConfigAction::Set {
                key: "notify".to_string(),
                value: "false".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap();

        assert_eq!(store.load().await.unwrap().notify, Some(false));
    }
}
