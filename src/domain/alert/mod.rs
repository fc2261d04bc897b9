//! Alert triggering domain module

mod cooldown;
mod debounce;
mod keywords;
mod trigger;

pub use cooldown::{Cooldown, DEFAULT_COOLDOWN_MS};
pub use debounce::{should_trigger, Debouncer};
pub use keywords::{KeywordMatcher, DEFAULT_ERROR_KEYWORDS};
pub use trigger::{TriggerEvent, TriggerPolicy, TriggerReason};
