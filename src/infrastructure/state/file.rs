//! Last-trigger timestamp kept in a small text file

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{TriggerStateError, TriggerStateStore};

use crate::infrastructure::paths;

/// Stores the last trigger time as decimal milliseconds
pub struct FileTriggerStateStore {
    path: PathBuf,
}

impl FileTriggerStateStore {
    /// Store at the platform cache location
    pub fn new() -> Self {
        Self {
            path: paths::trigger_state_path(),
        }
    }

    /// Store at a custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for FileTriggerStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TriggerStateStore for FileTriggerStateStore {
    async fn load(&self) -> Result<Option<u64>, TriggerStateError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(TriggerStateError::ReadFailed(e.to_string())),
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        trimmed.parse().map(Some).map_err(|e| {
            TriggerStateError::ReadFailed(format!("invalid timestamp \"{}\": {}", trimmed, e))
        })
    }

    async fn save(&self, last_trigger_ms: u64) -> Result<(), TriggerStateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| TriggerStateError::WriteFailed(e.to_string()))?;
        }

        fs::write(&self.path, last_trigger_ms.to_string())
            .await
            .map_err(|e| TriggerStateError::WriteFailed(e.to_string()))
    }
}
