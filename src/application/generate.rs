//! Generate alert sound use case

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::tone::{synthesize, AudioClipSpec};
use crate::domain::wav::{serialize, WavFormat};

use super::ports::{AssetError, AssetWriter};

/// Errors from the generate use case
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to save sound: {0}")]
    Asset(#[from] AssetError),
}

/// Output from the generate use case
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOutput {
    /// Where the WAV file was written
    pub path: PathBuf,
    /// Number of 16-bit samples in the clip
    pub sample_count: usize,
    /// Total file size including the header
    pub byte_len: usize,
}

/// Synthesizes a tone and stores it as a mono WAV file
pub struct GenerateSoundUseCase<W>
where
    W: AssetWriter,
{
    writer: W,
}

impl<W> GenerateSoundUseCase<W>
where
    W: AssetWriter,
{
    /// Create a new use case instance
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Synthesize `spec`, serialize it and write it to `path`
    pub async fn execute(
        &self,
        spec: &AudioClipSpec,
        path: &Path,
    ) -> Result<GenerateOutput, GenerateError> {
        let buffer = synthesize(spec);
        let bytes = serialize(&buffer, WavFormat::mono(spec.sample_rate_hz()));

        tracing::debug!(
            path = %path.display(),
            samples = buffer.len(),
            bytes = bytes.len(),
            "writing generated sound"
        );
        self.writer.write(path, &bytes).await?;

        Ok(GenerateOutput {
            path: path.to_path_buf(),
            sample_count: buffer.len(),
            byte_len: bytes.len(),
        })
    }
}
