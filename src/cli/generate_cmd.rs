//! Generate command handler

use std::path::PathBuf;

use thiserror::Error;

use crate::application::{GenerateError, GenerateSoundUseCase};
use crate::domain::error::ClipSpecError;
use crate::domain::tone::AudioClipSpec;
use crate::infrastructure::paths::default_sound_path;
use crate::infrastructure::FsAssetWriter;

use super::presenter::Presenter;

/// Tone parameters collected from the command line
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub output: Option<PathBuf>,
    pub sample_rate: u32,
    pub duration: f64,
    pub frequency: f64,
    pub volume: f64,
    pub fade: f64,
}

/// Errors from the generate command
#[derive(Debug, Error)]
pub enum GenerateCommandError {
    #[error("Invalid tone: {0}")]
    InvalidTone(#[from] ClipSpecError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl GenerateCommandError {
    /// Bad parameters are usage errors; write failures are not
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidTone(_))
    }
}

/// Handle the generate subcommand
pub async fn handle_generate_command(
    args: GenerateArgs,
    presenter: &Presenter,
) -> Result<(), GenerateCommandError> {
    let spec = AudioClipSpec::new(
        args.sample_rate,
        args.duration,
        args.frequency,
        args.volume,
        args.fade,
    )?;
    let path = args.output.unwrap_or_else(default_sound_path);

    let use_case = GenerateSoundUseCase::new(FsAssetWriter::new());
    let output = use_case.execute(&spec, &path).await?;

    presenter.success(&presenter.format_generated(&output, spec.duration_secs(), spec.frequency_hz()));
    Ok(())
}
