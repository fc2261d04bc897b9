//! Sound command handler

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::application::ports::{ConfigStore, PlaybackError};
use crate::application::AlertOutcome;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

use super::app::{alert_options, build_alerter};
use super::args::{SoundAction, SUPPORTED_SOUND_EXTENSIONS};
use super::presenter::Presenter;

/// Errors from the sound subcommands
#[derive(Debug, Error)]
pub enum SoundCommandError {
    #[error("Sound file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported sound format: {}. Supported: {}", .path.display(), SUPPORTED_SOUND_EXTENSIONS.join(", "))]
    UnsupportedFormat { path: PathBuf },

    #[error("Sound path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("{0}")]
    InvalidOptions(String),

    #[error("No sound file found at {}. Use 'terminal-sound sound set <path>' or 'terminal-sound generate' to set one.", .0.display())]
    SoundMissing(PathBuf),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SoundCommandError {
    /// Whether the error comes from bad user input
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::UnsupportedFormat { .. }
                | Self::NonUtf8Path(_)
                | Self::InvalidOptions(_)
        )
    }
}

/// Handle sound subcommand. `config` is the merged configuration.
pub async fn handle_sound_command<S: ConfigStore>(
    action: SoundAction,
    store: &S,
    config: &AppConfig,
    presenter: &Presenter,
) -> Result<(), SoundCommandError> {
    match action {
        SoundAction::Set { path } => handle_set(store, presenter, &path).await,
        SoundAction::Clear => handle_clear(store, presenter).await,
        SoundAction::Test => handle_test(config, presenter).await,
        SoundAction::Path => handle_path(config, presenter),
    }
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    path: &Path,
) -> Result<(), SoundCommandError> {
    let absolute = validate_sound_file(path).await?;
    let stored = absolute
        .to_str()
        .ok_or_else(|| SoundCommandError::NonUtf8Path(absolute.clone()))?
        .to_string();

    let mut config = store.load().await?;
    config.custom_sound_path = Some(stored);
    store.save(&config).await?;

    let name = absolute
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    presenter.success(&format!("Custom sound set! File: {}", name));
    Ok(())
}

async fn handle_clear<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), SoundCommandError> {
    let mut config = store.load().await?;
    if config.custom_sound_path.take().is_none() {
        presenter.info("No custom sound set");
        return Ok(());
    }

    store.save(&config).await?;
    presenter.success("Custom sound cleared, using the default sound");
    Ok(())
}

async fn handle_test(config: &AppConfig, presenter: &Presenter) -> Result<(), SoundCommandError> {
    let options = alert_options(config).map_err(SoundCommandError::InvalidOptions)?;
    let alerter = build_alerter(&options);

    presenter.info("Playing test sound...");
    match alerter.play_now().await {
        AlertOutcome::SoundMissing(path) => Err(SoundCommandError::SoundMissing(path)),
        AlertOutcome::PlaybackFailed(e) => Err(e.into()),
        _ => Ok(()),
    }
}

fn handle_path(config: &AppConfig, presenter: &Presenter) -> Result<(), SoundCommandError> {
    let options = alert_options(config).map_err(SoundCommandError::InvalidOptions)?;
    let sound = build_alerter(&options).resolve_sound();

    presenter.output(&sound.to_string_lossy());
    if !sound.exists() {
        presenter.warn("File does not exist yet. Run 'terminal-sound generate' to create it.");
    }
    Ok(())
}

/// Check that `path` is an existing sound file in a supported format and
/// return its absolute form
pub async fn validate_sound_file(path: &Path) -> Result<PathBuf, SoundCommandError> {
    // The settings file is TOML, which only holds UTF-8 strings
    if path.to_str().is_none() {
        return Err(SoundCommandError::NonUtf8Path(path.to_path_buf()));
    }

    let supported = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| SUPPORTED_SOUND_EXTENSIONS.contains(&e.as_str()));
    if !supported {
        return Err(SoundCommandError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(SoundCommandError::NotFound(path.to_path_buf())),
    }

    tokio::fs::canonicalize(path)
        .await
        .map_err(|_| SoundCommandError::NotFound(path.to_path_buf()))
}
