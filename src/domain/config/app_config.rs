//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::alert::{Cooldown, KeywordMatcher, TriggerPolicy, DEFAULT_ERROR_KEYWORDS};
use crate::domain::error::DurationParseError;

/// Player used when none is configured
pub const DEFAULT_PLAYER: &str = "system";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub enabled: Option<bool>,
    pub cooldown: Option<String>,
    pub custom_sound_path: Option<String>,
    pub error_keywords: Option<Vec<String>>,
    pub keyword_detection: Option<bool>,
    pub player: Option<String>,
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            enabled: Some(true),
            cooldown: Some(Cooldown::default_cooldown().to_string()),
            custom_sound_path: None,
            error_keywords: Some(
                DEFAULT_ERROR_KEYWORDS
                    .iter()
                    .map(|k| k.to_string())
                    .collect(),
            ),
            keyword_detection: Some(false),
            player: Some(DEFAULT_PLAYER.to_string()),
            notify: Some(true),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            enabled: other.enabled.or(self.enabled),
            cooldown: other.cooldown.or(self.cooldown),
            custom_sound_path: other.custom_sound_path.or(self.custom_sound_path),
            error_keywords: other.error_keywords.or(self.error_keywords),
            keyword_detection: other.keyword_detection.or(self.keyword_detection),
            player: other.player.or(self.player),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get enabled flag, or true if not set
    pub fn enabled_or_default(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Parse the cooldown, falling back to the default when not set
    pub fn cooldown_or_default(&self) -> Result<Cooldown, DurationParseError> {
        self.cooldown
            .as_deref()
            .map_or(Ok(Cooldown::default_cooldown()), str::parse)
    }

    /// Get the custom sound path, ignoring blank values
    pub fn custom_sound_path(&self) -> Option<PathBuf> {
        self.custom_sound_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    /// Get error keywords, or the built-in list if not set
    pub fn error_keywords_or_default(&self) -> KeywordMatcher {
        match &self.error_keywords {
            Some(keywords) => KeywordMatcher::new(keywords),
            None => KeywordMatcher::default(),
        }
    }

    /// Get keyword detection setting, or false if not set
    pub fn keyword_detection_or_default(&self) -> bool {
        self.keyword_detection.unwrap_or(false)
    }

    /// Get player preference, or "system" if not set
    pub fn player_or_default(&self) -> &str {
        self.player.as_deref().unwrap_or(DEFAULT_PLAYER)
    }

    /// Get notify setting, or true if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    /// Build the trigger policy described by this config
    pub fn trigger_policy(&self) -> TriggerPolicy {
        if self.keyword_detection_or_default() {
            TriggerPolicy::with_keywords(self.error_keywords_or_default())
        } else {
            TriggerPolicy::exit_code_only()
        }
    }
}
