//! Trigger state port interface

use async_trait::async_trait;
use thiserror::Error;

/// Errors loading or saving the last trigger time
#[derive(Debug, Clone, Error)]
pub enum TriggerStateError {
    #[error("Failed to read trigger state: {0}")]
    ReadFailed(String),

    #[error("Failed to write trigger state: {0}")]
    WriteFailed(String),
}

/// Port for remembering when the last alert fired across invocations
#[async_trait]
pub trait TriggerStateStore: Send + Sync {
    /// Load the last trigger time in milliseconds since the Unix epoch.
    /// Returns `Ok(None)` if nothing has been recorded yet.
    async fn load(&self) -> Result<Option<u64>, TriggerStateError>;

    /// Record the last trigger time
    async fn save(&self, last_trigger_ms: u64) -> Result<(), TriggerStateError>;
}
