//! wavgen configuration library
//!
//! This crate provides the types that describe a test-signal generation run,
//! their validation, and the level (gain) computation.
//!
//! # Example
//!
//! ```
//! use wavgen_spec::{validate_config, LevelParams, MarkerConfig, SampleFormat, WaveformConfig, WaveformType};
//!
//! let config = WaveformConfig::builder(WaveformType::Counter)
//!     .channels(2)
//!     .format(SampleFormat::Int32)
//!     .samples(4)
//!     .markers(MarkerConfig::msb())
//!     .gain(LevelParams::default().gain())
//!     .build();
//!
//! assert!(validate_config(&config).is_ok());
//! assert_eq!(config.payload_bytes(), 32);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Run configuration and builder
//! - [`error`]: Configuration errors
//! - [`format`]: Output sample formats
//! - [`level`]: dB settings to linear gain
//! - [`validation`]: Pre-generation checks
//! - [`waveform`]: Waveform types and their capabilities

pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod validation;
pub mod waveform;

pub use config::{
    cycle_length, samples_for_duration, BurstParams, MarkerConfig, MarkerPosition,
    WaveformConfig, WaveformConfigBuilder, DEFAULT_DURATION_MS, DEFAULT_FREQUENCY_HZ,
    DEFAULT_SAMPLE_RATE_HZ, MAX_CHANNELS, MAX_DURATION_MS, MAX_SAMPLES_PER_CHANNEL,
    MAX_SAMPLE_RATE_HZ,
};
pub use error::{ConfigError, ConfigResult};
pub use format::SampleFormat;
pub use level::{gain_from_levels, gain_to_db, LevelParams};
pub use validation::{validate_channels, validate_config, validate_frequency, validate_sample_rate};
pub use waveform::WaveformType;
