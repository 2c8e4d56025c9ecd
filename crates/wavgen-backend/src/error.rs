//! Error types for the generation backend.

use thiserror::Error;
use wavgen_spec::ConfigError;

/// Result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur while generating or reading a WAV stream.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The configuration was rejected before any output was written.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The finalizer was handed a sample width it cannot serialize.
    #[error("cannot narrow samples to {bits} bits")]
    UnsupportedNarrowing {
        /// Requested bits per sample.
        bits: u16,
    },

    /// Writing to (or reading from) the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A container could not be parsed.
    #[error("malformed WAV container: {message}")]
    MalformedContainer {
        /// What was wrong.
        message: String,
    },
}

impl GenerateError {
    /// Creates a malformed container error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedContainer {
            message: message.into(),
        }
    }

    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidConfig(_) => "GEN_001",
            GenerateError::UnsupportedNarrowing { .. } => "GEN_002",
            GenerateError::Io(_) => "GEN_003",
            GenerateError::MalformedContainer { .. } => "GEN_004",
        }
    }

    /// Whether the error stems from the configuration rather than the run.
    pub fn is_config_error(&self) -> bool {
        matches!(self, GenerateError::InvalidConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: GenerateError = ConfigError::invalid_value("rate", "too high").into();
        assert!(err.is_config_error());
        assert_eq!(err.code(), "GEN_001");
        assert!(err.to_string().contains("too high"));
    }

    #[test]
    fn test_narrowing_message() {
        let err = GenerateError::UnsupportedNarrowing { bits: 8 };
        assert_eq!(err.to_string(), "cannot narrow samples to 8 bits");
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_malformed_helper() {
        let err = GenerateError::malformed("missing data chunk");
        assert!(err.to_string().contains("missing data chunk"));
        assert_eq!(err.code(), "GEN_004");
    }
}
