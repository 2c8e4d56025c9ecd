//! Run configuration consumed by the generation backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::SampleFormat;
use crate::waveform::WaveformType;

/// Highest supported sample rate (192kHz).
pub const MAX_SAMPLE_RATE_HZ: u32 = 192_000;
/// Longest supported duration (10 minutes).
pub const MAX_DURATION_MS: u64 = 10 * 60 * 1000;
/// Largest per-channel sample count (10 minutes at 192kHz).
pub const MAX_SAMPLES_PER_CHANNEL: u64 = MAX_DURATION_MS * MAX_SAMPLE_RATE_HZ as u64 / 1000;
/// Largest channel count.
pub const MAX_CHANNELS: u16 = 8;

/// Default sample rate.
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 48_000;
/// Default tone frequency.
pub const DEFAULT_FREQUENCY_HZ: u32 = 440;
/// Default duration when neither samples nor duration are given.
pub const DEFAULT_DURATION_MS: u64 = 1000;

/// Which byte of a sample carries the channel marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPosition {
    /// Most-significant byte of the 32-bit word.
    Msb,
    /// Least-significant byte of the output word.
    #[default]
    Lsb,
}

impl fmt::Display for MarkerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerPosition::Msb => f.write_str("most-significant byte"),
            MarkerPosition::Lsb => f.write_str("least-significant byte"),
        }
    }
}

impl FromStr for MarkerPosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "msb" | "tb" => Ok(MarkerPosition::Msb),
            "lsb" | "bb" => Ok(MarkerPosition::Lsb),
            other => Err(ConfigError::invalid_value(
                "markers",
                format!("'{}' is not a marker position (use msb/tb or lsb/bb)", other),
            )),
        }
    }
}

/// Channel marker settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Whether markers are injected at all.
    pub enabled: bool,
    /// Byte that receives the marker.
    pub position: MarkerPosition,
}

impl MarkerConfig {
    /// Markers disabled.
    pub fn off() -> Self {
        Self::default()
    }

    /// Markers in the most-significant byte.
    pub fn msb() -> Self {
        Self {
            enabled: true,
            position: MarkerPosition::Msb,
        }
    }

    /// Markers in the least-significant byte.
    pub fn lsb() -> Self {
        Self {
            enabled: true,
            position: MarkerPosition::Lsb,
        }
    }

    /// True when markers are enabled and occupy the low byte.
    pub fn in_lsb(&self) -> bool {
        self.enabled && self.position == MarkerPosition::Lsb
    }
}

/// Timing of the burst waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurstParams {
    /// Milliseconds between the starts of consecutive bursts.
    pub period_ms: u32,
    /// Sine cycles per burst.
    pub num_cycles: u32,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            period_ms: 100,
            num_cycles: 1,
        }
    }
}

/// Immutable per-run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Output sample format.
    pub format: SampleFormat,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Samples per channel.
    pub samples_per_channel: u64,
    /// Requested frequency in Hz.
    pub frequency_hz: u32,
    /// Selected waveform.
    pub waveform: WaveformType,
    /// Channel marker settings.
    #[serde(default)]
    pub markers: MarkerConfig,
    /// Burst timing.
    #[serde(default)]
    pub burst: BurstParams,
    /// Draw independent noise for every channel.
    #[serde(default)]
    pub uncorrelated: bool,
    /// Linear gain applied to audio waveforms (at most 1.0).
    pub gain: f64,
}

impl WaveformConfig {
    /// Starts a builder with the default rate, format, channel count and duration.
    pub fn builder(waveform: WaveformType) -> WaveformConfigBuilder {
        WaveformConfigBuilder::new(waveform)
    }

    /// Total bytes in the data chunk.
    pub fn payload_bytes(&self) -> u64 {
        self.samples_per_channel * self.channels as u64 * self.format.bytes_per_sample() as u64
    }

    /// Total samples across all channels.
    pub fn total_samples(&self) -> u64 {
        self.samples_per_channel * self.channels as u64
    }

    /// Approximate duration in milliseconds, truncated.
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.samples_per_channel * 1000 / self.sample_rate as u64
    }

    /// Samples per cycle after integer quantisation of the frequency.
    pub fn cycle_length(&self) -> u32 {
        cycle_length(self.sample_rate, self.frequency_hz)
    }

    /// Frequency actually produced by the periodic generators.
    pub fn realized_frequency(&self) -> f64 {
        let cycle = self.cycle_length();
        if cycle == 0 {
            return 0.0;
        }
        self.sample_rate as f64 / cycle as f64
    }
}

/// Samples per cycle for a frequency, using integer division.
pub fn cycle_length(sample_rate: u32, frequency_hz: u32) -> u32 {
    if frequency_hz == 0 {
        return 0;
    }
    sample_rate / frequency_hz
}

/// Per-channel sample count for a duration in milliseconds.
pub fn samples_for_duration(sample_rate: u32, duration_ms: u64) -> u64 {
    duration_ms * sample_rate as u64 / 1000
}

/// Builder for [`WaveformConfig`].
#[derive(Debug, Clone)]
pub struct WaveformConfigBuilder {
    config: WaveformConfig,
}

impl WaveformConfigBuilder {
    fn new(waveform: WaveformType) -> Self {
        Self {
            config: WaveformConfig {
                sample_rate: DEFAULT_SAMPLE_RATE_HZ,
                format: SampleFormat::default(),
                channels: 1,
                samples_per_channel: samples_for_duration(
                    DEFAULT_SAMPLE_RATE_HZ,
                    DEFAULT_DURATION_MS,
                ),
                frequency_hz: DEFAULT_FREQUENCY_HZ,
                waveform,
                markers: MarkerConfig::off(),
                burst: BurstParams::default(),
                uncorrelated: false,
                gain: 1.0,
            },
        }
    }

    /// Sets the sample rate.
    pub fn sample_rate(mut self, rate: u32) -> Self {
        self.config.sample_rate = rate;
        self
    }

    /// Sets the output format.
    pub fn format(mut self, format: SampleFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Sets the channel count.
    pub fn channels(mut self, channels: u16) -> Self {
        self.config.channels = channels;
        self
    }

    /// Sets the per-channel sample count.
    pub fn samples(mut self, samples_per_channel: u64) -> Self {
        self.config.samples_per_channel = samples_per_channel;
        self
    }

    /// Sets the per-channel sample count from a duration at the current rate.
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.config.samples_per_channel =
            samples_for_duration(self.config.sample_rate, duration_ms);
        self
    }

    /// Sets the frequency.
    pub fn frequency(mut self, frequency_hz: u32) -> Self {
        self.config.frequency_hz = frequency_hz;
        self
    }

    /// Sets channel markers.
    pub fn markers(mut self, markers: MarkerConfig) -> Self {
        self.config.markers = markers;
        self
    }

    /// Sets burst timing.
    pub fn burst(mut self, period_ms: u32, num_cycles: u32) -> Self {
        self.config.burst = BurstParams {
            period_ms,
            num_cycles,
        };
        self
    }

    /// Enables or disables uncorrelated noise.
    pub fn uncorrelated(mut self, uncorrelated: bool) -> Self {
        self.config.uncorrelated = uncorrelated;
        self
    }

    /// Sets the linear gain.
    pub fn gain(mut self, gain: f64) -> Self {
        self.config.gain = gain;
        self
    }

    /// Finishes the builder without validating.
    pub fn build(self) -> WaveformConfig {
        self.config
    }
}
