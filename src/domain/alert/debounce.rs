//! Alert debouncing

use super::cooldown::Cooldown;

/// Whether an alert at `now_ms` may fire given the previous trigger.
///
/// Strictly more than the cooldown must have elapsed. A clock that went
/// backwards counts as no time elapsed.
pub fn should_trigger(now_ms: u64, last_trigger_ms: Option<u64>, cooldown: Cooldown) -> bool {
    match last_trigger_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) > cooldown.as_millis(),
    }
}

/// Remembers when the last alert fired.
///
/// Owned by whoever drives the event loop; timestamps are milliseconds on
/// any monotonic or wall clock, as long as the caller is consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Debouncer {
    cooldown: Cooldown,
    last_trigger_ms: Option<u64>,
}

impl Debouncer {
    /// Create a debouncer that has never fired
    pub const fn new(cooldown: Cooldown) -> Self {
        Self {
            cooldown,
            last_trigger_ms: None,
        }
    }

    /// Restore a debouncer from a persisted trigger time
    pub const fn with_last_trigger(cooldown: Cooldown, last_trigger_ms: Option<u64>) -> Self {
        Self {
            cooldown,
            last_trigger_ms,
        }
    }

    pub const fn last_trigger_ms(&self) -> Option<u64> {
        self.last_trigger_ms
    }

    /// Record a trigger at `now_ms` if the cooldown allows it.
    /// Returns false, leaving the state untouched, when suppressed.
    pub fn try_trigger(&mut self, now_ms: u64) -> bool {
        if should_trigger(now_ms, self.last_trigger_ms, self.cooldown) {
            self.last_trigger_ms = Some(now_ms);
            true
        } else {
            false
        }
    }
}
