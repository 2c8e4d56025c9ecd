//! Turns command-line arguments into a run configuration.
//!
//! Out-of-range values are sanitised the way the option surface always has:
//! rates, channel counts, durations and sample counts are clamped to their
//! maxima (with a warning), the burst period is limited to the duration and
//! a zero frequency becomes 1 Hz. Everything else is left for
//! [`wavgen_spec::validate_config`] to reject.

use std::str::FromStr;

use wavgen_spec::{
    samples_for_duration, ConfigError, ConfigResult, LevelParams, MarkerConfig, MarkerPosition,
    SampleFormat, WaveformConfig, WaveformType, DEFAULT_DURATION_MS, MAX_CHANNELS,
    MAX_DURATION_MS, MAX_SAMPLES_PER_CHANNEL, MAX_SAMPLE_RATE_HZ,
};

use crate::cli_args::Cli;
use crate::units::{parse_duration_ms, parse_frequency_hz};

/// Shortest accepted output filename, e.g. `o.wav`.
pub const MIN_FILENAME_LEN: usize = 5;

/// Builds the configuration described by the command line.
pub fn config_from_args(cli: &Cli) -> ConfigResult<WaveformConfig> {
    let waveform_name = cli
        .waveform
        .as_deref()
        .ok_or_else(|| ConfigError::invalid_value("type", "a waveform type is required"))?;
    let waveform = WaveformType::from_str(waveform_name)?;
    let format = SampleFormat::from_str(&cli.bitdepth)?;

    let mut sample_rate = parse_frequency_hz(&cli.rate)?;
    if sample_rate > MAX_SAMPLE_RATE_HZ {
        tracing::warn!(sample_rate, max = MAX_SAMPLE_RATE_HZ, "sample rate clamped");
        sample_rate = MAX_SAMPLE_RATE_HZ;
    }

    let mut channels = cli.channels;
    if channels > MAX_CHANNELS {
        tracing::warn!(channels, max = MAX_CHANNELS, "channel count clamped");
        channels = MAX_CHANNELS;
    }

    let mut frequency_hz = parse_frequency_hz(&cli.frequency)?;
    if frequency_hz == 0 {
        tracing::debug!("frequency raised from 0 to 1 Hz");
        frequency_hz = 1;
    }

    let mut duration_ms = match &cli.duration {
        Some(duration) => parse_duration_ms(duration)?,
        None => DEFAULT_DURATION_MS,
    };
    if duration_ms > MAX_DURATION_MS {
        tracing::warn!(duration_ms, max = MAX_DURATION_MS, "duration clamped");
        duration_ms = MAX_DURATION_MS;
    }

    let samples_per_channel = match cli.samples {
        Some(samples) if samples > MAX_SAMPLES_PER_CHANNEL => {
            tracing::warn!(samples, max = MAX_SAMPLES_PER_CHANNEL, "sample count clamped");
            MAX_SAMPLES_PER_CHANNEL
        }
        Some(samples) => samples,
        None => samples_for_duration(sample_rate, duration_ms),
    };
    if cli.samples.is_some() && sample_rate > 0 {
        duration_ms = samples_per_channel * 1000 / sample_rate as u64;
    }

    // Runs shorter than 1 ms keep a 1 ms period.
    let period_limit = duration_ms.max(1);
    let mut period_ms = parse_duration_ms(&cli.period)?;
    if period_ms > period_limit {
        tracing::debug!(period_ms, duration_ms, "burst period limited to the duration");
        period_ms = period_limit;
    }
    let period_ms = u32::try_from(period_ms)
        .map_err(|_| ConfigError::invalid_value("period", "too long"))?;

    let markers = match &cli.markers {
        Some(position) => MarkerConfig {
            enabled: true,
            position: MarkerPosition::from_str(position)?,
        },
        None => MarkerConfig::off(),
    };

    let gain = if cli.has_level_options() {
        LevelParams::new(
            cli.align.unwrap_or(0.0),
            cli.level.unwrap_or(0.0),
            cli.power.unwrap_or(1),
        )
        .gain()
    } else {
        1.0
    };

    tracing::debug!(
        %waveform,
        %format,
        sample_rate,
        channels,
        samples_per_channel,
        frequency_hz,
        gain,
        "parsed command line"
    );

    Ok(WaveformConfig::builder(waveform)
        .sample_rate(sample_rate)
        .format(format)
        .channels(channels)
        .samples(samples_per_channel)
        .frequency(frequency_hz)
        .markers(markers)
        .burst(period_ms, cli.numcycles)
        .uncorrelated(cli.uncorrelated)
        .gain(gain)
        .build())
}

/// Checks the output filename length.
pub fn check_filename(filename: &str) -> ConfigResult<()> {
    if filename.chars().count() < MIN_FILENAME_LEN {
        return Err(ConfigError::invalid_value(
            "filename",
            format!(
                "'{}' is shorter than {} characters (use at least 'o.wav')",
                filename, MIN_FILENAME_LEN
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> ConfigResult<WaveformConfig> {
        let mut argv = vec!["wavgen"];
        argv.extend_from_slice(args);
        config_from_args(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["-t", "sine", "out.wav"]).unwrap();
        assert_eq!(config.sample_rate, 48_000);
        assert_eq!(config.format, SampleFormat::Int32);
        assert_eq!(config.channels, 1);
        assert_eq!(config.samples_per_channel, 48_000);
        assert_eq!(config.frequency_hz, 440);
        assert_eq!(config.gain, 1.0);
        assert_eq!(config.burst.period_ms, 100);
        assert_eq!(config.burst.num_cycles, 1);
    }

    #[test]
    fn test_samples_override_duration() {
        let config = parse(&["-t", "counter", "-d", "5s", "-s", "4", "out.wav"]).unwrap();
        assert_eq!(config.samples_per_channel, 4);
    }

    #[test]
    fn test_duration_units_and_rate_units() {
        let config = parse(&["-t", "silence", "-r", "8k", "-d", "2s", "out.wav"]).unwrap();
        assert_eq!(config.sample_rate, 8000);
        assert_eq!(config.samples_per_channel, 16_000);
    }

    #[test]
    fn test_clamps() {
        let config = parse(&["-t", "silence", "-r", "384000", "-c", "12", "-d", "1h", "o.wav"])
            .unwrap();
        assert_eq!(config.sample_rate, MAX_SAMPLE_RATE_HZ);
        assert_eq!(config.channels, MAX_CHANNELS);
        assert_eq!(config.samples_per_channel, MAX_SAMPLES_PER_CHANNEL);
    }

    #[test]
    fn test_period_limited_to_duration() {
        let config = parse(&["-t", "burst", "-d", "50", "-p", "1s", "o.wav"]).unwrap();
        assert_eq!(config.burst.period_ms, 50);
    }

    #[test]
    fn test_short_burst_by_sample_count() {
        let config = parse(&["-t", "burst", "-s", "40", "o.wav"]).unwrap();
        assert_eq!(config.samples_per_channel, 40);
        assert_eq!(config.burst.period_ms, 1);
        assert!(wavgen_spec::validate_config(&config).is_ok());
    }

    #[test]
    fn test_level_options() {
        let config = parse(&["-t", "sine", "-l", "-6", "o.wav"]).unwrap();
        assert!((config.gain - 10f64.powf(-6.0 / 20.0)).abs() < 1e-12);

        let config = parse(&["-t", "sine", "-a", "3", "-l", "10", "o.wav"]).unwrap();
        assert_eq!(config.gain, 1.0);

        let config = parse(&["-t", "pink", "-w", "8", "o.wav"]).unwrap();
        assert!((20.0 * config.gain.log10() + 9.0309).abs() < 1e-3);
    }

    #[test]
    fn test_markers_and_aliases() {
        let config = parse(&["-t", "count", "-m", "tb", "o.wav"]).unwrap();
        assert_eq!(config.waveform, WaveformType::Counter);
        assert_eq!(config.markers, MarkerConfig::msb());

        let config = parse(&["-t", "step", "-m", "bb", "o.wav"]).unwrap();
        assert_eq!(config.waveform, WaveformType::Steps);
        assert_eq!(config.markers, MarkerConfig::lsb());
    }

    #[test]
    fn test_float_bitdepth() {
        let config = parse(&["-t", "sine", "-b", "0", "o.wav"]).unwrap();
        assert_eq!(config.format, SampleFormat::Float32);
        let config = parse(&["-t", "sine", "-b", "float", "o.wav"]).unwrap();
        assert_eq!(config.format, SampleFormat::Float32);
    }

    #[test]
    fn test_bad_values() {
        assert!(parse(&["-t", "triangle", "o.wav"]).is_err());
        assert!(parse(&["-t", "sine", "-b", "12", "o.wav"]).is_err());
        assert!(parse(&["-t", "sine", "-m", "middle", "o.wav"]).is_err());
        assert!(parse(&["-t", "sine", "-d", "5 days", "o.wav"]).is_err());
    }

    #[test]
    fn test_zero_frequency_raised() {
        let config = parse(&["-t", "sine", "-f", "0", "o.wav"]).unwrap();
        assert_eq!(config.frequency_hz, 1);
    }

    #[test]
    fn test_filename_length() {
        assert!(check_filename("o.wav").is_ok());
        assert!(check_filename("a.wa").is_err());
    }
}
