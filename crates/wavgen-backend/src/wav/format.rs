//! WAV container layout parameters.

use wavgen_spec::{SampleFormat, WaveformConfig};

/// `fmt ` format tag for integer PCM.
pub const WAVE_FORMAT_PCM: u16 = 1;
/// `fmt ` format tag for IEEE754 float.
pub const WAVE_FORMAT_IEEE_FLOAT: u16 = 3;

/// Size of the `fmt ` chunk body.
pub const FMT_CHUNK_SIZE: u32 = 16;
/// Size of the `fact` chunk body.
pub const FACT_CHUNK_SIZE: u32 = 4;

/// WAV format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample encoding.
    pub sample_format: SampleFormat,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Creates a format description.
    pub fn new(sample_format: SampleFormat, channels: u16, sample_rate: u32) -> Self {
        Self {
            sample_format,
            channels,
            sample_rate,
        }
    }

    /// Format tag written to the `fmt ` chunk.
    pub fn format_tag(&self) -> u16 {
        if self.sample_format.is_float() {
            WAVE_FORMAT_IEEE_FLOAT
        } else {
            WAVE_FORMAT_PCM
        }
    }

    /// Bits per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.sample_format.bits_per_sample()
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.sample_format.bytes_per_sample()
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Float output carries a `fact` chunk.
    pub fn has_fact_chunk(&self) -> bool {
        self.sample_format.is_float()
    }
}

/// Everything needed to write the container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Format parameters.
    pub format: WavFormat,
    /// Samples per channel.
    pub samples_per_channel: u64,
}

impl WavHeader {
    /// Creates a header.
    pub fn new(format: WavFormat, samples_per_channel: u64) -> Self {
        Self {
            format,
            samples_per_channel,
        }
    }

    /// Header for a run configuration.
    pub fn from_config(config: &WaveformConfig) -> Self {
        Self::new(
            WavFormat::new(config.format, config.channels, config.sample_rate),
            config.samples_per_channel,
        )
    }

    /// Size of the `data` chunk body.
    pub fn payload_bytes(&self) -> u64 {
        self.samples_per_channel
            * self.format.channels as u64
            * self.format.bytes_per_sample() as u64
    }

    /// Value of the RIFF size field: everything after the first 8 bytes.
    pub fn riff_size(&self) -> u64 {
        // "WAVE" + fmt chunk + data chunk header
        let mut size = 4 + (8 + FMT_CHUNK_SIZE as u64) + 8 + self.payload_bytes();
        if self.format.has_fact_chunk() {
            size += 8 + FACT_CHUNK_SIZE as u64;
        }
        size
    }

    /// Total bytes before the payload (44, or 56 with a `fact` chunk).
    pub fn header_len(&self) -> usize {
        (self.riff_size() + 8 - self.payload_bytes()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm_sizes() {
        let header = WavHeader::new(WavFormat::new(SampleFormat::Int32, 2, 48_000), 4);
        assert_eq!(header.payload_bytes(), 32);
        assert_eq!(header.riff_size(), 36 + 32);
        assert_eq!(header.header_len(), 44);
        assert_eq!(header.format.block_align(), 8);
        assert_eq!(header.format.byte_rate(), 384_000);
        assert_eq!(header.format.format_tag(), WAVE_FORMAT_PCM);
    }

    #[test]
    fn test_float_sizes() {
        let header = WavHeader::new(WavFormat::new(SampleFormat::Float32, 1, 44_100), 10);
        assert_eq!(header.riff_size(), 36 + 12 + 40);
        assert_eq!(header.header_len(), 56);
        assert_eq!(header.format.format_tag(), WAVE_FORMAT_IEEE_FLOAT);
    }

    #[test]
    fn test_packed_24_bit() {
        let format = WavFormat::new(SampleFormat::Int24, 6, 96_000);
        assert_eq!(format.block_align(), 18);
        assert_eq!(format.byte_rate(), 1_728_000);
    }
}
