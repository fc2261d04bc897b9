//! Domain layer - Core logic
//!
//! Contains the tone synthesizer, the WAV container writer, alert triggering
//! rules, configuration value objects, and domain errors.
//! This layer has no dependencies on external systems.

pub mod alert;
pub mod config;
pub mod error;
pub mod tone;
pub mod wav;

// Re-export common types
pub use alert::{Cooldown, Debouncer, KeywordMatcher, TriggerEvent, TriggerPolicy};
pub use config::AppConfig;
pub use error::*;
pub use tone::{synthesize, AudioClipSpec, SampleBuffer};
pub use wav::{serialize, WavFormat};
