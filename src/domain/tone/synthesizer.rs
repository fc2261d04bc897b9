//! Sine tone synthesis with a linear fade envelope

use std::f64::consts::PI;

use super::clip_spec::AudioClipSpec;

/// Full-scale value a unit sample is multiplied by before quantization
const FULL_SCALE: f64 = 32767.0;

/// Ordered sequence of signed 16-bit PCM samples.
/// Produced once and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleBuffer {
    samples: Vec<i16>,
}

impl SampleBuffer {
    /// Get the samples
    pub fn as_slice(&self) -> &[i16] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<i16>> for SampleBuffer {
    fn from(samples: Vec<i16>) -> Self {
        Self { samples }
    }
}

/// Synthesize the tone described by `spec`.
///
/// Pure and deterministic: the same spec always yields the same samples.
pub fn synthesize(spec: &AudioClipSpec) -> SampleBuffer {
    let count = spec.sample_count();
    let fade_len = spec.fade_len();
    let rate = f64::from(spec.sample_rate_hz());
    let frequency = spec.frequency_hz();

    let samples = (0..count)
        .map(|i| {
            let amplitude = envelope(i, count, fade_len, spec.peak_amplitude());
            let value = (2.0 * PI * frequency * i as f64 / rate).sin() * amplitude;
            quantize(value)
        })
        .collect();

    SampleBuffer { samples }
}

/// Amplitude at sample `i`: linear ramp up over the first `fade_len` samples
/// and down over the last ones. A zero-length fade leaves the envelope flat.
fn envelope(i: usize, count: usize, fade_len: usize, peak: f64) -> f64 {
    if fade_len == 0 {
        return peak;
    }

    let fade = fade_len as f64;
    let mut amplitude = peak;
    if i < fade_len {
        amplitude *= i as f64 / fade;
    }
    if i + fade_len > count {
        amplitude *= (count - i) as f64 / fade;
    }
    amplitude
}

fn quantize(value: f64) -> i16 {
    (value * FULL_SCALE)
        .floor()
        .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}
