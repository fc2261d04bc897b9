//! Run and hook command handlers
//!
//! Both report a finished process to the alert use case. Debounce state is
//! kept on disk so that separate invocations share one cooldown.

use std::process::{ExitCode, Stdio};

use tokio::process::Command;

use crate::domain::alert::TriggerEvent;
use crate::infrastructure::FileTriggerStateStore;

use super::app::{build_alerter, unix_now_ms, EXIT_ERROR, EXIT_SUCCESS};
use super::args::AlertOptions;
use super::presenter::Presenter;
use super::signals::{shield_interrupts, shutdown_requested, until_shutdown};

/// Exit code when the command could not be started
pub const EXIT_SPAWN_FAILED: u8 = 127;

/// Run `argv` with inherited stdio, alert if it fails, and mirror its exit code
pub async fn run_command(
    options: AlertOptions,
    label: Option<String>,
    argv: Vec<String>,
    presenter: &Presenter,
) -> ExitCode {
    let Some((program, args)) = argv.split_first() else {
        presenter.error("No command given");
        return ExitCode::from(EXIT_ERROR);
    };
    let label = label.unwrap_or_else(|| argv.join(" "));

    tracing::debug!(%program, ?args, "spawning command");
    let spawned = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn();

    let (exit_code, mirrored) = match spawned {
        Ok(mut child) => {
            let guard = shield_interrupts();
            let status = child.wait().await;
            guard.abort();

            match status {
                Ok(status) => {
                    let code = status.code();
                    (code, mirror_exit_code(code))
                }
                Err(e) => {
                    presenter.error(&format!("Failed to wait for '{}': {}", label, e));
                    return ExitCode::from(EXIT_ERROR);
                }
            }
        }
        Err(e) => {
            presenter.error(&format!("Failed to run '{}': {}", program, e));
            let code = i32::from(EXIT_SPAWN_FAILED);
            (Some(code), EXIT_SPAWN_FAILED)
        }
    };

    let event = TriggerEvent::exited(Some(label), exit_code);
    if until_shutdown(report(&options, &event), shutdown_requested())
        .await
        .is_none()
    {
        tracing::debug!("alert interrupted");
    }

    ExitCode::from(mirrored)
}

/// Report an exit code from a shell hook. Always succeeds.
pub async fn hook_command(options: AlertOptions, exit_code: i32, label: Option<String>) -> ExitCode {
    let event = TriggerEvent::exited(label, Some(exit_code));
    report(&options, &event).await;
    ExitCode::from(EXIT_SUCCESS)
}

async fn report(options: &AlertOptions, event: &TriggerEvent) {
    let alerter = build_alerter(options);
    let store = FileTriggerStateStore::new();

    let outcome = alerter
        .handle_with_store(event, &store, unix_now_ms())
        .await;
    tracing::debug!(?outcome, "alert handled");
}

/// Exit code to return for a child that ended with `code`.
/// Signal termination and codes outside 0..=255 map to 1.
pub fn mirror_exit_code(code: Option<i32>) -> u8 {
    code.and_then(|c| u8::try_from(c).ok())
        .unwrap_or(EXIT_ERROR)
}
