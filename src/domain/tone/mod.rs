//! Tone synthesis domain module

mod clip_spec;
mod synthesizer;

pub use clip_spec::{
    AudioClipSpec, DEFAULT_DURATION_SECS, DEFAULT_FADE_FRACTION, DEFAULT_FREQUENCY_HZ,
    DEFAULT_PEAK_AMPLITUDE, DEFAULT_SAMPLE_RATE_HZ,
};
pub use synthesizer::{synthesize, SampleBuffer};
