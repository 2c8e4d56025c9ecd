//! Main entry point for waveform generation.
//!
//! Validates a configuration, writes the container header, then streams every
//! sample through the generator and finalizer into the sink.

use std::io::{self, Write};

use wavgen_spec::{validate_config, WaveformConfig};

use crate::error::GenerateResult;
use crate::finalize::{Finalizer, GenerationState};
use crate::synthesis::{create_generator, SamplePosition};
use crate::wav::{write_header, WavHeader};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    /// Samples written across all channels.
    pub samples_written: u64,
    /// Frames (per-channel samples) written.
    pub frames: u64,
    /// Bytes in the header.
    pub header_bytes: u64,
    /// Bytes in the `data` payload.
    pub payload_bytes: u64,
    /// Approximate duration, truncated to whole milliseconds.
    pub duration_ms: u64,
    /// Frequency actually produced after cycle quantisation.
    pub realized_frequency_hz: f64,
    /// BLAKE3 hash of the payload.
    pub pcm_hash: String,
}

impl GenerateReport {
    /// Total bytes written to the sink.
    pub fn total_bytes(&self) -> u64 {
        self.header_bytes + self.payload_bytes
    }
}

/// Forwards writes while hashing and counting them.
struct HashingWriter<'a, W: Write> {
    inner: &'a mut W,
    hasher: blake3::Hasher,
    bytes: u64,
}

impl<'a, W: Write> HashingWriter<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self {
            inner,
            hasher: blake3::Hasher::new(),
            bytes: 0,
        }
    }
}

impl<W: Write> Write for HashingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.hasher.update(&buf[..written]);
        self.bytes += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Generates a complete WAV stream into `sink`.
///
/// The configuration is validated before anything is written. Once writing
/// has started, any error aborts the run and bytes already written stay in
/// the sink.
///
/// # Arguments
/// * `config` - Run configuration
/// * `sink` - Output; the caller owns buffering and the final flush
///
/// # Returns
/// A report describing what was written
pub fn generate<W: Write>(config: &WaveformConfig, sink: &mut W) -> GenerateResult<GenerateReport> {
    validate_config(config)?;

    let header = WavHeader::from_config(config);
    let header_bytes = write_header(sink, &header)? as u64;
    tracing::debug!(
        header_bytes,
        payload_bytes = header.payload_bytes(),
        "wrote container header"
    );

    let mut generator = create_generator(config);
    let finalizer = Finalizer::new(config);
    let mut state = GenerationState::new(config.gain);
    let mut payload = HashingWriter::new(sink);
    let mut samples_written = 0u64;

    for index in 0..config.samples_per_channel {
        state.index = index;
        for channel in 0..config.channels {
            state.channel = channel;
            let position = SamplePosition::new(index, channel, config.channels);
            let raw = generator.generate(&position);
            finalizer.finalize(&mut state, raw, &mut payload)?;
            samples_written += 1;
        }
    }

    let payload_bytes = payload.bytes;
    let pcm_hash = payload.hasher.finalize().to_hex().to_string();

    tracing::info!(
        waveform = %config.waveform,
        samples_written,
        payload_bytes,
        "generation complete"
    );

    Ok(GenerateReport {
        samples_written,
        frames: config.samples_per_channel,
        header_bytes,
        payload_bytes,
        duration_ms: config.duration_ms(),
        realized_frequency_hz: config.realized_frequency(),
        pcm_hash,
    })
}

/// Generates a complete WAV file into memory.
pub fn generate_to_vec(config: &WaveformConfig) -> GenerateResult<(Vec<u8>, GenerateReport)> {
    let capacity = WavHeader::from_config(config).header_len() as u64 + config.payload_bytes();
    let mut buffer = Vec::with_capacity(capacity.min(1 << 26) as usize);
    let report = generate(config, &mut buffer)?;
    Ok((buffer, report))
}
