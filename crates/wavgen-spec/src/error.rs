//! Error types for configuration validation.

use thiserror::Error;

use crate::config::MarkerPosition;
use crate::format::SampleFormat;
use crate::waveform::WaveformType;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a waveform configuration is rejected before generation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Sample rate outside the supported range.
    #[error("invalid sample rate: {rate} Hz (expected 1..={max})")]
    InvalidSampleRate {
        /// The rejected rate.
        rate: u32,
        /// The maximum supported rate.
        max: u32,
    },

    /// Channel count outside the supported range.
    #[error("invalid channel count: {channels} (expected 1..={max})")]
    InvalidChannelCount {
        /// The rejected channel count.
        channels: u16,
        /// The maximum channel count.
        max: u16,
    },

    /// The sample format cannot be written.
    #[error("unsupported bit depth: {format}")]
    UnsupportedBitDepth {
        /// The rejected format.
        format: SampleFormat,
    },

    /// Frequency of zero or above Nyquist.
    #[error("invalid frequency: {frequency} Hz (must be between 1 and {nyquist} Hz)")]
    InvalidFrequency {
        /// The rejected frequency.
        frequency: u32,
        /// Half the sample rate.
        nyquist: u32,
    },

    /// Per-channel sample count is zero or exceeds the maximum.
    #[error("invalid sample count: {samples} per channel (expected 1..={max})")]
    InvalidSampleCount {
        /// The rejected count.
        samples: u64,
        /// The largest accepted count.
        max: u64,
    },

    /// The payload would not fit in the 32-bit RIFF size fields.
    #[error("payload of {bytes} bytes is too large for a RIFF container")]
    PayloadTooLarge {
        /// Total payload bytes requested.
        bytes: u64,
    },

    /// Channel markers cannot be placed on this waveform type.
    #[error("channel markers in the {position} are not allowed for {waveform} waveforms")]
    MarkersNotAllowed {
        /// The waveform type.
        waveform: WaveformType,
        /// The requested marker position.
        position: MarkerPosition,
    },

    /// Invalid burst timing parameter.
    #[error("invalid burst parameter '{name}': {message}")]
    InvalidBurst {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: String,
    },

    /// A value that could not be parsed.
    #[error("invalid value for '{name}': {message}")]
    InvalidValue {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid value error.
    pub fn invalid_value(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns a stable error code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidSampleRate { .. } => "CFG_001",
            ConfigError::InvalidChannelCount { .. } => "CFG_002",
            ConfigError::UnsupportedBitDepth { .. } => "CFG_003",
            ConfigError::InvalidFrequency { .. } => "CFG_004",
            ConfigError::InvalidSampleCount { .. } => "CFG_005",
            ConfigError::PayloadTooLarge { .. } => "CFG_006",
            ConfigError::MarkersNotAllowed { .. } => "CFG_007",
            ConfigError::InvalidBurst { .. } => "CFG_008",
            ConfigError::InvalidValue { .. } => "CFG_009",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_helper() {
        let err = ConfigError::invalid_value("duration", "unknown unit 'x'");
        assert!(err.to_string().contains("duration"));
        assert!(err.to_string().contains("unknown unit"));
        assert_eq!(err.code(), "CFG_009");
    }

    #[test]
    fn test_markers_message_names_type_and_position() {
        let err = ConfigError::MarkersNotAllowed {
            waveform: WaveformType::Pink,
            position: MarkerPosition::Msb,
        };
        let msg = err.to_string();
        assert!(msg.contains("pink"));
        assert!(msg.contains("most-significant byte"));
    }
}
