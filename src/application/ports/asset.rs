//! Asset output port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors writing a generated asset
#[derive(Debug, Clone, Error)]
pub enum AssetError {
    #[error("Failed to create directory {path}: {message}")]
    CreateDirFailed { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// Port for persisting generated files
#[async_trait]
pub trait AssetWriter: Send + Sync {
    /// Write `bytes` to `path`, creating parent directories as needed.
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), AssetError>;
}
