//! Signal handling for the long-running and wrapping commands

use std::future::Future;

use tokio::task::JoinHandle;

/// Resolves once the user asks the process to stop (Ctrl-C, or SIGTERM on unix).
///
/// If the handlers cannot be installed this never resolves.
pub async fn shutdown_requested() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    result = tokio::signal::ctrl_c() => {
                        if result.is_err() {
                            sigterm.recv().await;
                        }
                    }
                    _ = sigterm.recv() => {}
                }
                return;
            }
            Err(e) => tracing::warn!(error = %e, "failed to install SIGTERM handler"),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}

/// Swallow Ctrl-C for as long as the returned task runs.
/// The wrapped child still receives it from the terminal.
///
/// Once installed, tokio keeps the Ctrl-C handler for the rest of the
/// process, so aborting the task does not restore the default behavior.
/// Later work that should stop on Ctrl-C has to race [`until_shutdown`]
/// against [`shutdown_requested`].
pub fn shield_interrupts() -> JoinHandle<()> {
    tokio::spawn(async {
        while tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupt forwarded to child");
        }
    })
}

/// Drive `work` to completion unless `shutdown` resolves first.
/// Returns `None` when interrupted; `work` is dropped unfinished.
pub async fn until_shutdown<W, S>(work: W, shutdown: S) -> Option<W::Output>
where
    W: Future,
    S: Future<Output = ()>,
{
    tokio::select! {
        output = work => Some(output),
        _ = shutdown => None,
    }
}
