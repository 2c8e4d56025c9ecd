//! CLI argument definitions for the wavgen command-line interface.
//!
//! The `#[derive(Parser)]` type is defined here, keeping `main.rs` focused on
//! dispatch logic.

use clap::Parser;

/// wavgen - Test waveform generator
///
/// Writes a RIFF/WAVE file containing a deterministic test signal. When no
/// filename is given and stdout is not a terminal, the WAV stream is written
/// to stdout.
#[derive(Debug, Clone, Parser)]
#[command(name = "wavgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Alignment level in dBFS (never above 0)
    #[arg(short, long, allow_negative_numbers = true, value_name = "DBFS")]
    pub align: Option<f64>,

    /// Bits per sample: 16, 24, 32, or 0/float for 32-bit float
    #[arg(short, long, default_value = "32", value_name = "BITS")]
    pub bitdepth: String,

    /// Number of interleaved channels (1-8)
    #[arg(short, long, default_value_t = 1)]
    pub channels: u16,

    /// Duration, in ms unless suffixed with s, m or h
    #[arg(short, long, value_name = "DURATION")]
    pub duration: Option<String>,

    /// Frequency, in Hz unless suffixed with k/kHz
    #[arg(short, long, default_value = "440", value_name = "FREQ")]
    pub frequency: String,

    /// Peak level in dB relative to the alignment level (at most +20)
    #[arg(short, long, allow_negative_numbers = true, value_name = "DB")]
    pub level: Option<f64>,

    /// Channel markers: msb/tb (top byte) or lsb/bb (bottom byte)
    #[arg(short, long, value_name = "POSITION")]
    pub markers: Option<String>,

    /// Sine cycles per burst
    #[arg(short, long, default_value_t = 1, value_name = "CYCLES")]
    pub numcycles: u32,

    /// Burst period, in ms unless suffixed with s, m or h
    #[arg(short, long, default_value = "100", value_name = "PERIOD")]
    pub period: String,

    /// Sample rate, in Hz unless suffixed with k/kHz
    #[arg(short, long, default_value = "48000", value_name = "RATE")]
    pub rate: String,

    /// Samples per channel (overrides --duration)
    #[arg(short, long, value_name = "COUNT")]
    pub samples: Option<u64>,

    /// Waveform type: burst, counter, pink, saw, silence, sine, square, steps, white
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        required_unless_present = "describe"
    )]
    pub waveform: Option<String>,

    /// Draw independent noise for every channel
    #[arg(short, long)]
    pub uncorrelated: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Power fraction denominator, e.g. 8 for eighth power (overrides --level)
    #[arg(short = 'w', long, value_name = "N")]
    pub power: Option<u32>,

    /// Describe a waveform type (or all of them) and exit
    #[arg(long, value_name = "TYPE", num_args = 0..=1, default_missing_value = "all")]
    pub describe: Option<String>,

    /// Output a machine-readable JSON report (no colored output)
    #[arg(long)]
    pub json: bool,

    /// Output filename (at least 5 characters, e.g. 'o.wav')
    pub filename: Option<String>,
}

impl Cli {
    /// Whether any level option was supplied.
    pub fn has_level_options(&self) -> bool {
        self.align.is_some() || self.level.is_some() || self.power.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wavgen", "-t", "sine", "tone.wav"]).unwrap();
        assert_eq!(cli.waveform.as_deref(), Some("sine"));
        assert_eq!(cli.bitdepth, "32");
        assert_eq!(cli.channels, 1);
        assert_eq!(cli.frequency, "440");
        assert_eq!(cli.rate, "48000");
        assert_eq!(cli.period, "100");
        assert_eq!(cli.numcycles, 1);
        assert_eq!(cli.filename.as_deref(), Some("tone.wav"));
        assert!(!cli.has_level_options());
    }

    #[test]
    fn test_negative_levels() {
        let cli =
            Cli::try_parse_from(["wavgen", "-t", "sine", "-a", "-18", "-l", "-3.5", "x.wav"])
                .unwrap();
        assert_eq!(cli.align, Some(-18.0));
        assert_eq!(cli.level, Some(-3.5));
        assert!(cli.has_level_options());
    }

    #[test]
    fn test_type_required() {
        assert!(Cli::try_parse_from(["wavgen", "out.wav"]).is_err());
    }

    #[test]
    fn test_describe_without_type() {
        let cli = Cli::try_parse_from(["wavgen", "--describe"]).unwrap();
        assert_eq!(cli.describe.as_deref(), Some("all"));

        let cli = Cli::try_parse_from(["wavgen", "--describe", "burst"]).unwrap();
        assert_eq!(cli.describe.as_deref(), Some("burst"));
    }

    #[test]
    fn test_long_options() {
        let cli = Cli::try_parse_from([
            "wavgen",
            "--type",
            "burst",
            "--bitdepth",
            "float",
            "--channels",
            "2",
            "--duration",
            "2s",
            "--frequency",
            "1k",
            "--numcycles",
            "4",
            "--period",
            "200",
            "--uncorrelated",
            "--power",
            "8",
            "--json",
            "burst.wav",
        ])
        .unwrap();
        assert_eq!(cli.waveform.as_deref(), Some("burst"));
        assert_eq!(cli.bitdepth, "float");
        assert_eq!(cli.duration.as_deref(), Some("2s"));
        assert_eq!(cli.power, Some(8));
        assert!(cli.uncorrelated && cli.json);
    }
}
