//! Configuration validation.
//!
//! Every check here runs before an output sink is opened, so a rejected
//! configuration never produces partial output.

use crate::config::{WaveformConfig, MAX_CHANNELS, MAX_SAMPLES_PER_CHANNEL, MAX_SAMPLE_RATE_HZ};
use crate::error::{ConfigError, ConfigResult};
use crate::waveform::WaveformType;

/// Bytes of RIFF structure counted by the RIFF size field besides the payload
/// (WAVE tag, fmt chunk, fact chunk, data chunk header).
const MAX_HEADER_OVERHEAD: u64 = 4 + 24 + 12 + 8;

/// Validates a configuration for generation.
///
/// # Returns
/// * `Ok(())` if every sample can be generated and written
/// * `Err(ConfigError)` describing the first problem found
///
/// # Example
/// ```
/// use wavgen_spec::{validate_config, WaveformConfig, WaveformType};
///
/// let config = WaveformConfig::builder(WaveformType::Sine).frequency(1000).build();
/// assert!(validate_config(&config).is_ok());
///
/// let config = WaveformConfig::builder(WaveformType::Sine).frequency(30_000).build();
/// assert!(validate_config(&config).is_err());
/// ```
pub fn validate_config(config: &WaveformConfig) -> ConfigResult<()> {
    validate_sample_rate(config.sample_rate)?;
    validate_channels(config.channels)?;

    if !config.format.is_supported() {
        return Err(ConfigError::UnsupportedBitDepth {
            format: config.format,
        });
    }

    if config.samples_per_channel == 0 || config.samples_per_channel > MAX_SAMPLES_PER_CHANNEL {
        return Err(ConfigError::InvalidSampleCount {
            samples: config.samples_per_channel,
            max: MAX_SAMPLES_PER_CHANNEL,
        });
    }

    let payload = config.payload_bytes();
    if payload + MAX_HEADER_OVERHEAD > u32::MAX as u64 {
        return Err(ConfigError::PayloadTooLarge { bytes: payload });
    }

    validate_frequency(config.sample_rate, config.frequency_hz)?;
    validate_markers(config)?;

    if config.waveform == WaveformType::Burst {
        validate_burst(config)?;
    }

    if !config.gain.is_finite() || config.gain <= 0.0 || config.gain > 1.0 {
        return Err(ConfigError::invalid_value(
            "gain",
            format!("must be in (0, 1], got {}", config.gain),
        ));
    }

    Ok(())
}

/// Validates the sample rate.
pub fn validate_sample_rate(rate: u32) -> ConfigResult<()> {
    if rate == 0 || rate > MAX_SAMPLE_RATE_HZ {
        return Err(ConfigError::InvalidSampleRate {
            rate,
            max: MAX_SAMPLE_RATE_HZ,
        });
    }
    Ok(())
}

/// Validates the channel count.
pub fn validate_channels(channels: u16) -> ConfigResult<()> {
    if channels == 0 || channels > MAX_CHANNELS {
        return Err(ConfigError::InvalidChannelCount {
            channels,
            max: MAX_CHANNELS,
        });
    }
    Ok(())
}

/// Validates that a frequency lies in `[1, rate / 2]`.
pub fn validate_frequency(rate: u32, frequency_hz: u32) -> ConfigResult<()> {
    let nyquist = rate / 2;
    if frequency_hz == 0 || frequency_hz > nyquist {
        return Err(ConfigError::InvalidFrequency {
            frequency: frequency_hz,
            nyquist,
        });
    }
    Ok(())
}

fn validate_markers(config: &WaveformConfig) -> ConfigResult<()> {
    let markers = config.markers;
    if !markers.enabled {
        return Ok(());
    }

    let allowed = match markers.position {
        crate::config::MarkerPosition::Msb => config.waveform.permits_msb_markers(),
        crate::config::MarkerPosition::Lsb => config.waveform.permits_markers(),
    };

    if !allowed {
        return Err(ConfigError::MarkersNotAllowed {
            waveform: config.waveform,
            position: markers.position,
        });
    }

    if config.format.is_float() {
        tracing::warn!("channel markers are not applied to floating-point output");
    }

    Ok(())
}

fn validate_burst(config: &WaveformConfig) -> ConfigResult<()> {
    if config.burst.period_ms == 0 {
        return Err(ConfigError::InvalidBurst {
            name: "period",
            message: "must be at least 1 ms".to_string(),
        });
    }
    if config.burst.num_cycles == 0 {
        return Err(ConfigError::InvalidBurst {
            name: "numcycles",
            message: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
