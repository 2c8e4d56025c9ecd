//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag. Error codes are passed through from
//! the library error types.

use serde::{Deserialize, Serialize};
use wavgen_backend::GenerateReport;
use wavgen_spec::WaveformConfig;

/// Error codes for CLI-level failures.
pub mod error_codes {
    /// Output file could not be created
    pub const OUTPUT_CREATE: &str = "CLI_001";
    /// No filename and stdout is a terminal
    pub const NO_OUTPUT: &str = "CLI_002";
    /// Flushing the output failed
    pub const OUTPUT_FLUSH: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CFG_004", "GEN_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates an error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Settings of the run as written to the container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonConfig {
    /// Waveform type
    pub waveform: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Whether samples are IEEE float
    pub float: bool,
    /// Channel count
    pub channels: u16,
    /// Requested frequency in Hz
    pub frequency_hz: u32,
    /// Linear gain applied to audio waveforms
    pub gain: f64,
}

impl From<&WaveformConfig> for JsonConfig {
    fn from(config: &WaveformConfig) -> Self {
        Self {
            waveform: config.waveform.to_string(),
            sample_rate: config.sample_rate,
            bits_per_sample: config.format.bits_per_sample(),
            float: config.format.is_float(),
            channels: config.channels,
            frequency_hz: config.frequency_hz,
            gain: config.gain,
        }
    }
}

/// What was written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonReport {
    /// Samples written across all channels
    pub samples_written: u64,
    /// Samples per channel
    pub frames: u64,
    /// Bytes in the data chunk
    pub payload_bytes: u64,
    /// Total bytes including the header
    pub total_bytes: u64,
    /// Approximate duration in milliseconds
    pub duration_ms: u64,
    /// Frequency produced after cycle quantisation
    pub realized_frequency_hz: f64,
    /// BLAKE3 hash of the payload
    pub pcm_hash: String,
}

impl From<&GenerateReport> for JsonReport {
    fn from(report: &GenerateReport) -> Self {
        Self {
            samples_written: report.samples_written,
            frames: report.frames,
            payload_bytes: report.payload_bytes,
            total_bytes: report.total_bytes(),
            duration_ms: report.duration_ms,
            realized_frequency_hz: report.realized_frequency_hz,
            pcm_hash: report.pcm_hash.clone(),
        }
    }
}

/// Top-level JSON document for a generate run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    /// Whether the run succeeded
    pub success: bool,
    /// Errors (empty on success)
    pub errors: Vec<JsonError>,
    /// Output path, or `-` for stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Configuration, once parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<JsonConfig>,
    /// Report, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<JsonReport>,
}

impl GenerateOutput {
    /// A successful run.
    pub fn success(output: String, config: JsonConfig, report: JsonReport) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            output: Some(output),
            config: Some(config),
            report: Some(report),
        }
    }

    /// A failed run.
    pub fn failure(errors: Vec<JsonError>, output: Option<String>, config: Option<JsonConfig>) -> Self {
        Self {
            success: false,
            errors,
            output,
            config,
            report: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavgen_spec::WaveformType;

    #[test]
    fn test_failure_omits_report() {
        let output = GenerateOutput::failure(vec![JsonError::new("CFG_004", "bad")], None, None);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["code"], "CFG_004");
        assert!(json.get("report").is_none());
        assert!(json.get("output").is_none());
    }

    #[test]
    fn test_config_fields() {
        let config = WaveformConfig::builder(WaveformType::Pink).channels(2).build();
        let json = serde_json::to_value(JsonConfig::from(&config)).unwrap();
        assert_eq!(json["waveform"], "pink");
        assert_eq!(json["bits_per_sample"], 32);
        assert_eq!(json["float"], false);
        assert_eq!(json["channels"], 2);
    }
}
