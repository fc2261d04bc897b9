//! Filesystem asset writer

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{AssetError, AssetWriter};

/// Writes assets to the local filesystem, replacing existing files
#[derive(Debug, Default, Clone, Copy)]
pub struct FsAssetWriter;

impl FsAssetWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AssetWriter for FsAssetWriter {
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), AssetError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AssetError::CreateDirFailed {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
        }

        fs::write(path, bytes)
            .await
            .map_err(|e| AssetError::WriteFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn writes_into_new_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/error.wav");

        FsAssetWriter::new().write(&path, b"RIFF").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"RIFF");
    }

    #[tokio::test]
    async fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("error.wav");
        std::fs::write(&path, b"old contents").unwrap();

        FsAssetWriter::new().write(&path, b"new").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn reports_blocked_directory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"").unwrap();

        let err = FsAssetWriter::new()
            .write(&blocker.join("error.wav"), b"RIFF")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AssetError::CreateDirFailed { .. } | AssetError::WriteFailed { .. }
        ));
    }
}
