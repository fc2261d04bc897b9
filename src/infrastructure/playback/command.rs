//! Shared subprocess invocation for command-line players

use std::ffi::OsString;
use std::fmt;
use std::process::Stdio;

use tokio::process::Command;

use crate::application::ports::PlaybackError;

/// Windows flag that keeps a console window from flashing up
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// A player program together with its full argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: &'static str,
    pub args: Vec<OsString>,
}

impl PlayerCommand {
    pub fn new<I, S>(program: &'static str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run the player with all output discarded and wait for it to finish
    pub async fn run(&self) -> Result<(), PlaybackError> {
        let mut command = Command::new(self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        tracing::debug!(command = %self, "starting player");

        let status = command.status().await.map_err(|e| {
            let message = if e.kind() == std::io::ErrorKind::NotFound {
                "not found".to_string()
            } else {
                e.to_string()
            };
            PlaybackError::SpawnFailed {
                program: self.program.to_string(),
                message,
            }
        })?;

        if !status.success() {
            return Err(PlaybackError::PlayerFailed {
                program: self.program.to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
