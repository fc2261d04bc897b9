//! WAV container domain module

mod container;

pub use container::{serialize, WavFormat, BITS_PER_SAMPLE, HEADER_LEN};
