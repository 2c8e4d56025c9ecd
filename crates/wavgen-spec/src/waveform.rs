//! Waveform type selection and per-type capabilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The signal produced by a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveformType {
    /// Periodic bursts of sine cycles separated by silence.
    Burst,
    /// Positive integer count, one quantisation step per frame.
    Counter,
    /// Symmetric saw-tooth ramp.
    Saw,
    /// Digital silence.
    Silence,
    /// Pure sine wave.
    Sine,
    /// Non-antialiased square wave.
    Square,
    /// Five discrete positive levels.
    Steps,
    /// Pink (1/f) noise.
    Pink,
    /// White noise.
    White,
}

impl WaveformType {
    /// All waveform types in presentation order.
    pub const ALL: [WaveformType; 9] = [
        WaveformType::Counter,
        WaveformType::Steps,
        WaveformType::Saw,
        WaveformType::Sine,
        WaveformType::Square,
        WaveformType::Silence,
        WaveformType::Pink,
        WaveformType::Burst,
        WaveformType::White,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveformType::Burst => "burst",
            WaveformType::Counter => "counter",
            WaveformType::Saw => "saw",
            WaveformType::Silence => "silence",
            WaveformType::Sine => "sine",
            WaveformType::Square => "square",
            WaveformType::Steps => "steps",
            WaveformType::Pink => "pink",
            WaveformType::White => "white",
        }
    }

    /// Whether this is a true audio signal whose level may be scaled.
    ///
    /// Counter, silence and steps carry exact bit patterns and are never scaled.
    pub fn permits_level(&self) -> bool {
        !matches!(
            self,
            WaveformType::Counter | WaveformType::Silence | WaveformType::Steps
        )
    }

    /// Whether channel markers may overwrite a byte of each sample.
    ///
    /// Symmetric periodic signals are excluded: a marker byte would destroy
    /// their level accuracy and symmetry.
    pub fn permits_markers(&self) -> bool {
        matches!(
            self,
            WaveformType::Counter
                | WaveformType::Silence
                | WaveformType::Steps
                | WaveformType::Pink
                | WaveformType::White
        )
    }

    /// Whether markers may occupy the most-significant byte.
    pub fn permits_msb_markers(&self) -> bool {
        matches!(
            self,
            WaveformType::Counter | WaveformType::Silence | WaveformType::Steps
        )
    }

    /// Whether the requested frequency shapes the output.
    pub fn uses_frequency(&self) -> bool {
        matches!(
            self,
            WaveformType::Burst | WaveformType::Saw | WaveformType::Sine | WaveformType::Square
        )
    }

    /// One-line summary used in the general help.
    pub fn summary(&self) -> &'static str {
        match self {
            WaveformType::Counter => "positive values incrementing by one LSB per frame",
            WaveformType::Steps => "five levels for checking normalisation and conversion",
            WaveformType::Saw => "symmetric saw-tooth at the requested frequency",
            WaveformType::Sine => "symmetric sine wave at the requested frequency",
            WaveformType::Square => "symmetric square wave at the requested frequency",
            WaveformType::Silence => "zero samples, apart from channel markers if requested",
            WaveformType::Pink => "pink noise from 1/f filtering of the white source",
            WaveformType::Burst => "periodic bursts of sine cycles for latency measurement",
            WaveformType::White => "white noise from a fast pseudo-random generator",
        }
    }

    /// Detailed description printed by `--describe`.
    pub fn description(&self) -> &'static str {
        match self {
            WaveformType::Burst => {
                "PERIODIC BURST (-t burst)\n\n\
                 Emits a burst of sine cycles at the start of every period, e.g. four\n\
                 cycles of 100Hz every 100ms. Useful for measuring latency through a\n\
                 device, checking polarity along a signal chain, or time-aligning\n\
                 loudspeaker drivers.\n\n\
                 The burst frequency is quantised to a whole number of samples per\n\
                 cycle so every burst runs zero to zero. Markers are not allowed.\n\n\
                 Options: -f <frequency> -p <period ms> -n <cycles> -l <level> -a <align>"
            }
            WaveformType::Counter => {
                "COUNTER (-t counter)\n\n\
                 An integer count rising by one quantisation step per frame. Gaps in\n\
                 playback show up as jumps in the count, which makes this type useful\n\
                 for debugging buffers and drop-outs.\n\n\
                 Every channel in a frame carries the same count. Markers may be placed\n\
                 in the MSB or LSB; the count then occupies the remaining bytes.\n\n\
                 Not an audio signal: level options are ignored. Take care on playback.\n\n\
                 Options: -m <lsb|msb>"
            }
            WaveformType::Saw => {
                "SAW-TOOTH (-t saw)\n\n\
                 A ramp starting at zero, climbing to the peak and wrapping to the\n\
                 negative peak. The frequency is quantised to a whole number of samples\n\
                 per cycle to avoid jitter. The wrap produces a large step, so take care\n\
                 at low frequencies and high playback levels.\n\n\
                 Markers are not allowed (use counter or steps instead).\n\n\
                 Options: -f <frequency> -l <level> -a <align>"
            }
            WaveformType::Silence => {
                "SILENCE (-t silence)\n\n\
                 Zero-valued samples, for tracking down clicks and pops. Markers may be\n\
                 added in the MSB or LSB and cannot be mistaken for audio.\n\n\
                 MSB markers make the stream distinctly non-silent in DC terms.\n\n\
                 Options: -m <lsb|msb>"
            }
            WaveformType::Sine => {
                "SINE-WAVE (-t sine)\n\n\
                 A pure sine wave. The frequency is quantised to a whole number of\n\
                 samples per cycle to avoid jitter; common test frequencies such as\n\
                 1kHz at 48kHz are exact. Markers are not allowed.\n\n\
                 Options: -f <frequency> -l <level> -a <align> -w <power fraction>"
            }
            WaveformType::Square => {
                "SQUARE-WAVE (-t square)\n\n\
                 A non-antialiased square wave starting at the positive peak. The\n\
                 frequency is quantised to a whole number of samples per cycle.\n\
                 Markers are not allowed.\n\n\
                 Options: -f <frequency> -l <level> -a <align>"
            }
            WaveformType::Steps => {
                "STEPS (-t steps)\n\n\
                 Five positive levels (zero to full scale in quarters), one per frame,\n\
                 which are easy to recognise in a hex dump or analyser.\n\n\
                 Not an audio signal: level options are ignored. Markers may be placed\n\
                 in the MSB or LSB.\n\n\
                 Options: -m <lsb|msb>"
            }
            WaveformType::Pink => {
                "PINK NOISE (-t pink)\n\n\
                 A reasonable approximation of pink noise, not intended for precise\n\
                 frequency measurements. Aligned to 0dBFS it measures roughly -15dBFS\n\
                 RMS; use '--power 8' for an eighth-power source.\n\n\
                 Markers are allowed in the LSB only.\n\n\
                 Options: -l <level> -a <align> -w <power fraction> -m lsb -u"
            }
            WaveformType::White => {
                "WHITE NOISE (-t white)\n\n\
                 A reasonable approximation of white noise, not intended for precise\n\
                 frequency measurements. Aligned to 0dBFS it measures roughly -4.6dBFS\n\
                 RMS.\n\n\
                 Markers are allowed in the LSB only.\n\n\
                 Options: -l <level> -a <align> -w <power fraction> -m lsb -u"
            }
        }
    }
}

impl fmt::Display for WaveformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaveformType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "burst" => Ok(WaveformType::Burst),
            "count" | "counter" => Ok(WaveformType::Counter),
            "saw" | "sawtooth" => Ok(WaveformType::Saw),
            "silence" => Ok(WaveformType::Silence),
            "sine" | "sinewave" => Ok(WaveformType::Sine),
            "square" | "squarewave" => Ok(WaveformType::Square),
            "step" | "steps" => Ok(WaveformType::Steps),
            "pink" => Ok(WaveformType::Pink),
            "white" => Ok(WaveformType::White),
            other => Err(ConfigError::invalid_value(
                "type",
                format!(
                    "unknown waveform type '{}' (expected one of: {})",
                    other,
                    WaveformType::ALL
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            )),
        }
    }
}
