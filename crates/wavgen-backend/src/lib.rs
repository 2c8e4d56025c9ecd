//! wavgen backend - deterministic test-signal synthesis
//!
//! This crate turns a validated [`wavgen_spec::WaveformConfig`] into a
//! RIFF/WAVE stream. Identical configurations always produce identical bytes.
//!
//! # Pipeline
//!
//! For every frame, and every channel within it:
//!
//! 1. The waveform's [`synthesis::SignalGenerator`] produces a raw 32-bit sample
//! 2. The [`finalize::Finalizer`] applies gain, float conversion and channel
//!    markers, then narrows and writes the sample little-endian
//!
//! The container header is written once, before the first sample.
//!
//! # Example
//!
//! ```
//! use wavgen_backend::{generate_to_vec, read_format};
//! use wavgen_spec::{MarkerConfig, WaveformConfig, WaveformType};
//!
//! let config = WaveformConfig::builder(WaveformType::Counter)
//!     .channels(2)
//!     .samples(4)
//!     .markers(MarkerConfig::msb())
//!     .build();
//!
//! let (wav, report) = generate_to_vec(&config).unwrap();
//! assert_eq!(report.payload_bytes, 32);
//! assert_eq!(read_format(&wav).unwrap().channels, 2);
//! ```

pub mod error;
pub mod finalize;
pub mod generate;
pub mod markers;
pub mod rng;
pub mod sample;
pub mod synthesis;
pub mod wav;

pub use error::{GenerateError, GenerateResult};
pub use finalize::{Finalizer, GenerationState};
pub use generate::{generate, generate_to_vec, GenerateReport};
pub use markers::{inject_marker, marker_byte};
pub use sample::{Sample, MAX_LEVEL};
pub use synthesis::{create_generator, SamplePosition, SignalGenerator};
pub use wav::{compute_payload_hash, extract_payload, read_format, WavFormat, WavHeader, WavInfo};
