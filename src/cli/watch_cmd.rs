//! Watch command handler

use std::future::Future;
use std::io;
use std::process::ExitCode;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::Instant;

use crate::application::ports::{Notifier, Player};
use crate::application::{AlertOutcome, AlertUseCase};
use crate::domain::alert::TriggerEvent;

use super::app::{build_alerter, EXIT_ERROR, EXIT_SUCCESS};
use super::args::AlertOptions;
use super::presenter::Presenter;
use super::signals::{shutdown_requested, until_shutdown};

/// Counts kept while watching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub events: usize,
    pub played: usize,
    pub suppressed: usize,
}

impl WatchSummary {
    fn record(&mut self, outcome: &AlertOutcome) {
        self.events += 1;
        match outcome {
            AlertOutcome::Played(_) => self.played += 1,
            AlertOutcome::Suppressed => self.suppressed += 1,
            _ => {}
        }
    }
}

/// Watch stdin until EOF or a shutdown signal
pub async fn watch_command(options: AlertOptions, presenter: &Presenter) -> ExitCode {
    let alerter = build_alerter(&options);
    let stdin = BufReader::new(tokio::io::stdin());

    match watch_lines(&alerter, stdin, shutdown_requested()).await {
        Ok(summary) => {
            tracing::info!(
                events = summary.events,
                played = summary.played,
                suppressed = summary.suppressed,
                "watch stopped"
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Failed to read events: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Feed each non-blank line of `reader` to `alerter` as an event.
///
/// Events are handled one at a time with a single debouncer owned by this
/// loop. Stops at EOF or when `shutdown` resolves, including while a
/// sound is still playing.
pub async fn watch_lines<P, N, R, F>(
    alerter: &AlertUseCase<P, N>,
    reader: R,
    shutdown: F,
) -> io::Result<WatchSummary>
where
    P: Player,
    N: Notifier,
    R: AsyncBufRead + Unpin,
    F: Future<Output = ()>,
{
    let mut lines = reader.lines();
    let mut debouncer = alerter.new_debouncer();
    let mut summary = WatchSummary::default();
    let started = Instant::now();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::debug!("shutdown requested");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let event = TriggerEvent::parse_line(&line);
                let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                let handled = alerter.handle(&event, &mut debouncer, now_ms);
                let Some(outcome) = until_shutdown(handled, &mut shutdown).await else {
                    tracing::debug!("shutdown requested during playback");
                    break;
                };
                tracing::debug!(?event, ?outcome, "event handled");
                summary.record(&outcome);
            }
        }
    }

    Ok(summary)
}
