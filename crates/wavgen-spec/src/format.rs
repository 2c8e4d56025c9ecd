//! Output sample formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Word size and encoding of each written sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFormat {
    /// 8-bit integer. Accepted by the parser, rejected by validation.
    Int8,
    /// 16-bit signed little-endian integer.
    Int16,
    /// 24-bit signed little-endian integer (packed, 3 bytes).
    Int24,
    /// 32-bit signed little-endian integer.
    #[default]
    Int32,
    /// 32-bit IEEE754 little-endian float.
    Float32,
}

impl SampleFormat {
    /// Maps a bit depth to a format. A depth of 0 selects float output.
    pub fn from_bit_depth(bits: u16) -> Option<Self> {
        match bits {
            0 => Some(SampleFormat::Float32),
            8 => Some(SampleFormat::Int8),
            16 => Some(SampleFormat::Int16),
            24 => Some(SampleFormat::Int24),
            32 => Some(SampleFormat::Int32),
            _ => None,
        }
    }

    /// Bits per sample as stored in the container.
    pub fn bits_per_sample(&self) -> u16 {
        match self {
            SampleFormat::Int8 => 8,
            SampleFormat::Int16 => 16,
            SampleFormat::Int24 => 24,
            SampleFormat::Int32 | SampleFormat::Float32 => 32,
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample() / 8
    }

    /// Whether samples are written as IEEE floats.
    pub fn is_float(&self) -> bool {
        matches!(self, SampleFormat::Float32)
    }

    /// Whether the writer can serialize this format.
    pub fn is_supported(&self) -> bool {
        !matches!(self, SampleFormat::Int8)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleFormat::Float32 => f.write_str("32-bit float"),
            other => write!(f, "{}-bit integer", other.bits_per_sample()),
        }
    }
}

impl FromStr for SampleFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("float") || trimmed.eq_ignore_ascii_case("f32") {
            return Ok(SampleFormat::Float32);
        }

        let bits: u16 = trimmed.parse().map_err(|_| {
            ConfigError::invalid_value("bitdepth", format!("'{}' is not a number", trimmed))
        })?;

        SampleFormat::from_bit_depth(bits).ok_or_else(|| {
            ConfigError::invalid_value(
                "bitdepth",
                format!("{} bits is not supported (use 16, 24, 32 or 0 for float)", bits),
            )
        })
    }
}
