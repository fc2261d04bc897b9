//! Canonical RIFF/WAVE serialization of 16-bit PCM

use crate::domain::tone::SampleBuffer;

/// Size of the canonical header that precedes the sample data
pub const HEADER_LEN: usize = 44;

/// Samples are always written as signed 16-bit integers
pub const BITS_PER_SAMPLE: u16 = 16;

const FMT_CHUNK_LEN: u32 = 16;
const PCM_FORMAT_TAG: u16 = 1;
const BYTES_PER_SAMPLE: usize = (BITS_PER_SAMPLE / 8) as usize;

/// Format parameters written to the `fmt ` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub sample_rate_hz: u32,
    pub channels: u16,
}

impl WavFormat {
    /// Single-channel 16-bit PCM at the given rate
    pub const fn mono(sample_rate_hz: u32) -> Self {
        Self {
            sample_rate_hz,
            channels: 1,
        }
    }

    /// Bytes per sample frame across all channels
    pub const fn block_align(&self) -> u16 {
        self.channels.saturating_mul(BITS_PER_SAMPLE / 8)
    }

    /// Bytes per second of audio
    pub const fn byte_rate(&self) -> u32 {
        self.sample_rate_hz.saturating_mul(self.block_align() as u32)
    }
}

/// Serialize `buffer` as a WAV file: 44-byte header, then the samples in
/// order as little-endian i16. Multi-channel buffers must be interleaved.
///
/// Size fields saturate at `u32::MAX`; validated clip specs never get there.
pub fn serialize(buffer: &SampleBuffer, format: WavFormat) -> Vec<u8> {
    let data_len = buffer.len() * BYTES_PER_SAMPLE;
    let data_size = u32::try_from(data_len).unwrap_or(u32::MAX);

    let mut bytes = Vec::with_capacity(HEADER_LEN + data_len);

    // RIFF header
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&data_size.saturating_add(36).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    // fmt sub-chunk
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    bytes.extend_from_slice(&PCM_FORMAT_TAG.to_le_bytes());
    bytes.extend_from_slice(&format.channels.to_le_bytes());
    bytes.extend_from_slice(&format.sample_rate_hz.to_le_bytes());
    bytes.extend_from_slice(&format.byte_rate().to_le_bytes());
    bytes.extend_from_slice(&format.block_align().to_le_bytes());
    bytes.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data sub-chunk
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());
    for sample in buffer.as_slice() {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tone::{synthesize, AudioClipSpec};

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn header_layout_is_canonical() {
        let buffer = SampleBuffer::from(vec![0i16; 10]);
        let bytes = serialize(&buffer, WavFormat::mono(44_100));

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(u32_at(&bytes, 4), 36 + 20);
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(u32_at(&bytes, 16), 16);
        assert_eq!(u16_at(&bytes, 20), 1);
        assert_eq!(u16_at(&bytes, 22), 1);
        assert_eq!(u32_at(&bytes, 24), 44_100);
        assert_eq!(u32_at(&bytes, 28), 88_200);
        assert_eq!(u16_at(&bytes, 32), 2);
        assert_eq!(u16_at(&bytes, 34), 16);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(u32_at(&bytes, 40), 20);
    }

    #[test]
    fn length_is_header_plus_two_bytes_per_sample() {
        for n in [0usize, 1, 7, 1000] {
            let bytes = serialize(&SampleBuffer::from(vec![1i16; n]), WavFormat::mono(8_000));
            assert_eq!(bytes.len(), HEADER_LEN + 2 * n);
            assert_eq!(u32_at(&bytes, 40) as usize, 2 * n);
        }
    }

    #[test]
    fn samples_are_little_endian_in_order() {
        let buffer = SampleBuffer::from(vec![1, -1, i16::MAX, i16::MIN, 0x1234]);
        let bytes = serialize(&buffer, WavFormat::mono(8_000));
        assert_eq!(
            &bytes[HEADER_LEN..],
            &[0x01, 0x00, 0xFF, 0xFF, 0xFF, 0x7F, 0x00, 0x80, 0x34, 0x12]
        );
    }

    #[test]
    fn stereo_format_fields() {
        let format = WavFormat {
            sample_rate_hz: 48_000,
            channels: 2,
        };
        assert_eq!(format.block_align(), 4);
        assert_eq!(format.byte_rate(), 192_000);

        let bytes = serialize(&SampleBuffer::from(vec![0i16; 4]), format);
        assert_eq!(u16_at(&bytes, 22), 2);
        assert_eq!(u32_at(&bytes, 28), 192_000);
        assert_eq!(u16_at(&bytes, 32), 4);
    }

    #[test]
    fn error_beep_file_sizes() {
        let spec = AudioClipSpec::error_beep();
        let buffer = synthesize(&spec);
        let bytes = serialize(&buffer, WavFormat::mono(spec.sample_rate_hz()));

        assert_eq!(buffer.len(), 13_230);
        assert_eq!(u32_at(&bytes, 40), 26_460);
        assert_eq!(bytes.len(), 26_504);
        assert_eq!(u32_at(&bytes, 4), 26_496);
    }
}
