//! Audio clip description value object

use crate::domain::error::ClipSpecError;

/// Sample rate of the bundled error beep
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 44_100;

/// Length of the bundled error beep in seconds
pub const DEFAULT_DURATION_SECS: f64 = 0.3;

/// Pitch of the bundled error beep
pub const DEFAULT_FREQUENCY_HZ: f64 = 800.0;

/// Peak amplitude of the bundled error beep
pub const DEFAULT_PEAK_AMPLITUDE: f64 = 0.6;

/// Share of the clip spent fading in (and again fading out)
pub const DEFAULT_FADE_FRACTION: f64 = 0.1;

/// Largest sample count whose 16-bit data still fits the RIFF size field
const MAX_SAMPLES: u64 = (u32::MAX as u64 - 36) / 2;

/// Value object describing a sine tone to synthesize.
/// Immutable and validated on creation; fully determines the output samples.
///
/// Fade windows are not clamped: a fade fraction of 0.5 or more makes the
/// fade-in and fade-out overlap, and both attenuations then apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioClipSpec {
    sample_rate_hz: u32,
    duration_secs: f64,
    frequency_hz: f64,
    peak_amplitude: f64,
    fade_fraction: f64,
}

impl AudioClipSpec {
    /// Create a validated clip description
    pub fn new(
        sample_rate_hz: u32,
        duration_secs: f64,
        frequency_hz: f64,
        peak_amplitude: f64,
        fade_fraction: f64,
    ) -> Result<Self, ClipSpecError> {
        if sample_rate_hz == 0 {
            return Err(ClipSpecError::ZeroSampleRate);
        }
        if !(duration_secs.is_finite() && duration_secs > 0.0) {
            return Err(ClipSpecError::InvalidDuration(duration_secs));
        }
        if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
            return Err(ClipSpecError::InvalidFrequency(frequency_hz));
        }
        if !(0.0..=1.0).contains(&peak_amplitude) {
            return Err(ClipSpecError::InvalidAmplitude(peak_amplitude));
        }
        if !(0.0..1.0).contains(&fade_fraction) {
            return Err(ClipSpecError::InvalidFadeFraction(fade_fraction));
        }

        let samples = (f64::from(sample_rate_hz) * duration_secs).floor();
        if samples > MAX_SAMPLES as f64 {
            return Err(ClipSpecError::TooLong {
                samples: samples as u64,
            });
        }

        Ok(Self {
            sample_rate_hz,
            duration_secs,
            frequency_hz,
            peak_amplitude,
            fade_fraction,
        })
    }

    /// The placeholder alert: 0.3s of 800Hz at 60% volume with 10% fades
    pub fn error_beep() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            duration_secs: DEFAULT_DURATION_SECS,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            peak_amplitude: DEFAULT_PEAK_AMPLITUDE,
            fade_fraction: DEFAULT_FADE_FRACTION,
        }
    }

    pub const fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    pub const fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub const fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    pub const fn peak_amplitude(&self) -> f64 {
        self.peak_amplitude
    }

    pub const fn fade_fraction(&self) -> f64 {
        self.fade_fraction
    }

    /// Number of samples the clip produces: floor(rate × duration)
    pub fn sample_count(&self) -> usize {
        (f64::from(self.sample_rate_hz) * self.duration_secs).floor() as usize
    }

    /// Number of samples in each fade window: floor(count × fade fraction)
    pub fn fade_len(&self) -> usize {
        (self.sample_count() as f64 * self.fade_fraction).floor() as usize
    }
}

impl Default for AudioClipSpec {
    fn default() -> Self {
        Self::error_beep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_beep_counts() {
        let spec = AudioClipSpec::error_beep();
        assert_eq!(spec.sample_count(), 13_230);
        assert_eq!(spec.fade_len(), 1_323);
    }

    #[test]
    fn error_beep_passes_validation() {
        let beep = AudioClipSpec::error_beep();
        let validated = AudioClipSpec::new(
            beep.sample_rate_hz(),
            beep.duration_secs(),
            beep.frequency_hz(),
            beep.peak_amplitude(),
            beep.fade_fraction(),
        )
        .unwrap();
        assert_eq!(beep, validated);
    }

    #[test]
    fn rejects_zero_sample_rate() {
        assert_eq!(
            AudioClipSpec::new(0, 0.3, 800.0, 0.6, 0.1),
            Err(ClipSpecError::ZeroSampleRate)
        );
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert!(AudioClipSpec::new(44_100, 0.0, 800.0, 0.6, 0.1).is_err());
        assert!(AudioClipSpec::new(44_100, -1.0, 800.0, 0.6, 0.1).is_err());
        assert!(AudioClipSpec::new(44_100, f64::NAN, 800.0, 0.6, 0.1).is_err());
    }

    #[test]
    fn rejects_non_positive_frequency() {
        assert!(AudioClipSpec::new(44_100, 0.3, 0.0, 0.6, 0.1).is_err());
        assert!(AudioClipSpec::new(44_100, 0.3, f64::INFINITY, 0.6, 0.1).is_err());
    }

    #[test]
    fn amplitude_bounds_are_inclusive() {
        assert!(AudioClipSpec::new(44_100, 0.3, 800.0, 0.0, 0.1).is_ok());
        assert!(AudioClipSpec::new(44_100, 0.3, 800.0, 1.0, 0.1).is_ok());
        assert!(AudioClipSpec::new(44_100, 0.3, 800.0, 1.01, 0.1).is_err());
        assert!(AudioClipSpec::new(44_100, 0.3, 800.0, -0.1, 0.1).is_err());
    }

    #[test]
    fn fade_fraction_upper_bound_is_exclusive() {
        assert!(AudioClipSpec::new(44_100, 0.3, 800.0, 0.6, 0.0).is_ok());
        assert!(AudioClipSpec::new(44_100, 0.3, 800.0, 0.6, 0.99).is_ok());
        assert_eq!(
            AudioClipSpec::new(44_100, 0.3, 800.0, 0.6, 1.0),
            Err(ClipSpecError::InvalidFadeFraction(1.0))
        );
    }

    #[test]
    fn rejects_clips_too_long_for_riff() {
        let err = AudioClipSpec::new(192_000, 20_000.0, 800.0, 0.6, 0.1).unwrap_err();
        assert!(matches!(err, ClipSpecError::TooLong { .. }));
    }

    #[test]
    fn tiny_duration_has_zero_fade() {
        let spec = AudioClipSpec::new(44_100, 0.0002, 800.0, 0.6, 0.1).unwrap();
        assert_eq!(spec.sample_count(), 8);
        assert_eq!(spec.fade_len(), 0);
    }
}
