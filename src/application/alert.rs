//! Failure alert use case

use std::path::PathBuf;

use crate::domain::alert::{Cooldown, Debouncer, TriggerEvent, TriggerPolicy};

use super::ports::{
    NotificationIcon, Notifier, PlaybackError, Player, TriggerStateStore,
};

const NOTIFICATION_TITLE: &str = "Terminal Sound";

/// Settings the alert use case is built with
#[derive(Debug, Clone)]
pub struct AlertSettings {
    /// Master switch for event-driven alerts
    pub enabled: bool,
    /// Minimum gap between two alerts
    pub cooldown: Cooldown,
    /// Which events count as failures
    pub policy: TriggerPolicy,
    /// User-chosen sound, used when it exists
    pub custom_sound: Option<PathBuf>,
    /// Sound used when no custom sound is available
    pub default_sound: PathBuf,
    /// Show a desktop notification when no sound file can be found
    pub notify: bool,
}

/// What happened in response to an event
#[derive(Debug, Clone)]
pub enum AlertOutcome {
    /// The sound at this path was played
    Played(PathBuf),
    /// Alerts are turned off
    Disabled,
    /// The event was not a failure
    Ignored,
    /// A failure, but within the cooldown of the previous alert
    Suppressed,
    /// No sound file exists at the resolved path
    SoundMissing(PathBuf),
    /// The player reported an error
    PlaybackFailed(PlaybackError),
}

impl AlertOutcome {
    pub fn is_played(&self) -> bool {
        matches!(self, Self::Played(_))
    }
}

/// Plays the alert sound when a command or task fails
pub struct AlertUseCase<P, N>
where
    P: Player,
    N: Notifier,
{
    player: P,
    notifier: N,
    settings: AlertSettings,
}

impl<P, N> AlertUseCase<P, N>
where
    P: Player,
    N: Notifier,
{
    /// Create a new use case instance
    pub fn new(player: P, notifier: N, settings: AlertSettings) -> Self {
        Self {
            player,
            notifier,
            settings,
        }
    }

    /// A debouncer using the configured cooldown that has never fired
    pub fn new_debouncer(&self) -> Debouncer {
        Debouncer::new(self.settings.cooldown)
    }

    /// The sound to play: the custom sound if it exists, else the default
    pub fn resolve_sound(&self) -> PathBuf {
        if let Some(custom) = &self.settings.custom_sound {
            if custom.exists() {
                return custom.clone();
            }
            tracing::debug!(path = %custom.display(), "custom sound missing, using default");
        }
        self.settings.default_sound.clone()
    }

    /// React to an event, alerting if it is a failure outside the cooldown
    pub async fn handle(
        &self,
        event: &TriggerEvent,
        debouncer: &mut Debouncer,
        now_ms: u64,
    ) -> AlertOutcome {
        if !self.settings.enabled {
            return AlertOutcome::Disabled;
        }

        let Some(reason) = self.settings.policy.classify(event) else {
            return AlertOutcome::Ignored;
        };

        if !debouncer.try_trigger(now_ms) {
            tracing::debug!(%reason, "alert suppressed by cooldown");
            return AlertOutcome::Suppressed;
        }

        tracing::info!(%reason, "failure detected");
        self.play_resolved().await
    }

    /// Like [`handle`](Self::handle), with the debounce state kept in `store`
    /// so that separate invocations share one cooldown.
    ///
    /// State errors are logged; the alert then proceeds as if nothing had
    /// fired before.
    pub async fn handle_with_store<S>(
        &self,
        event: &TriggerEvent,
        store: &S,
        now_ms: u64,
    ) -> AlertOutcome
    where
        S: TriggerStateStore + ?Sized,
    {
        let last = store.load().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable trigger state");
            None
        });

        let mut debouncer = Debouncer::with_last_trigger(self.settings.cooldown, last);
        let outcome = self.handle(event, &mut debouncer, now_ms).await;

        if let Some(fired) = debouncer.last_trigger_ms().filter(|ms| Some(*ms) != last) {
            if let Err(e) = store.save(fired).await {
                tracing::warn!(error = %e, "failed to record trigger time");
            }
        }

        outcome
    }

    /// Play the alert right away, ignoring the cooldown and the enabled flag
    pub async fn play_now(&self) -> AlertOutcome {
        self.play_resolved().await
    }

    async fn play_resolved(&self) -> AlertOutcome {
        let sound = self.resolve_sound();

        if !sound.exists() {
            tracing::warn!(path = %sound.display(), "sound file not found");
            if self.settings.notify {
                let _ = self
                    .notifier
                    .notify(
                        NOTIFICATION_TITLE,
                        "No sound file found. Use 'terminal-sound sound set <path>' or 'terminal-sound generate' to set one.",
                        NotificationIcon::Warning,
                    )
                    .await;
            }
            return AlertOutcome::SoundMissing(sound);
        }

        tracing::info!(path = %sound.display(), player = self.player.name(), "playing sound");
        match self.player.play(&sound).await {
            Ok(()) => AlertOutcome::Played(sound),
            Err(e) => {
                tracing::error!(error = %e, "sound playback error");
                AlertOutcome::PlaybackFailed(e)
            }
        }
    }
}
