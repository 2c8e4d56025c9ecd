//! Container parsing for verification.

use std::io::Cursor;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use wavgen_spec::SampleFormat;

use crate::error::{GenerateError, GenerateResult};

use super::format::WAVE_FORMAT_IEEE_FLOAT;

/// Fields recovered from a WAV container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    /// `fmt ` format tag.
    pub format_tag: u16,
    /// Channel count.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Per-channel sample count from the `fact` chunk, if present.
    pub fact_samples: Option<u32>,
    /// Value of the RIFF size field.
    pub riff_size: u32,
    /// Value of the `data` chunk size field.
    pub data_size: u32,
}

impl WavInfo {
    /// Sample format described by the `fmt ` chunk.
    pub fn sample_format(&self) -> Option<SampleFormat> {
        if self.format_tag == WAVE_FORMAT_IEEE_FLOAT {
            return (self.bits_per_sample == 32).then_some(SampleFormat::Float32);
        }
        match SampleFormat::from_bit_depth(self.bits_per_sample)? {
            SampleFormat::Float32 => None,
            format => Some(format),
        }
    }

    /// Per-channel sample count implied by the `data` chunk size.
    pub fn samples_per_channel(&self) -> u64 {
        if self.block_align == 0 {
            return 0;
        }
        self.data_size as u64 / self.block_align as u64
    }
}

/// Iterates over `(id, body)` pairs of the chunks following the RIFF header.
fn chunks<'a>(wav_data: &'a [u8]) -> impl Iterator<Item = (&'a [u8], &'a [u8])> + 'a {
    let mut pos = 12;
    std::iter::from_fn(move || {
        if pos + 8 > wav_data.len() {
            return None;
        }
        let id = &wav_data[pos..pos + 4];
        let size = LittleEndian::read_u32(&wav_data[pos + 4..pos + 8]) as usize;
        let start = pos + 8;
        let end = start.checked_add(size)?;
        if end > wav_data.len() {
            return None;
        }
        pos = end + (size % 2);
        Some((id, &wav_data[start..end]))
    })
}

fn has_riff_header(wav_data: &[u8]) -> bool {
    wav_data.len() >= 12 && &wav_data[0..4] == b"RIFF" && &wav_data[8..12] == b"WAVE"
}

/// Parses the header chunks of a WAV buffer.
pub fn read_format(wav_data: &[u8]) -> GenerateResult<WavInfo> {
    if !has_riff_header(wav_data) {
        return Err(GenerateError::malformed("missing RIFF/WAVE header"));
    }
    let riff_size = LittleEndian::read_u32(&wav_data[4..8]);

    let mut fmt = None;
    let mut fact_samples = None;
    let mut data_size = None;

    for (id, body) in chunks(wav_data) {
        match id {
            b"fmt " => fmt = Some(body),
            b"fact" if body.len() >= 4 => fact_samples = Some(LittleEndian::read_u32(body)),
            b"data" => {
                data_size = Some(body.len() as u32);
                break;
            }
            _ => {}
        }
    }

    let fmt = fmt.ok_or_else(|| GenerateError::malformed("missing fmt chunk"))?;
    if fmt.len() < 16 {
        return Err(GenerateError::malformed(format!(
            "fmt chunk is {} bytes, expected at least 16",
            fmt.len()
        )));
    }
    let data_size = data_size.ok_or_else(|| GenerateError::malformed("missing data chunk"))?;

    let mut cursor = Cursor::new(fmt);
    Ok(WavInfo {
        format_tag: cursor.read_u16::<LittleEndian>()?,
        channels: cursor.read_u16::<LittleEndian>()?,
        sample_rate: cursor.read_u32::<LittleEndian>()?,
        byte_rate: cursor.read_u32::<LittleEndian>()?,
        block_align: cursor.read_u16::<LittleEndian>()?,
        bits_per_sample: cursor.read_u16::<LittleEndian>()?,
        fact_samples,
        riff_size,
        data_size,
    })
}

/// Extracts the `data` payload from a WAV buffer.
///
/// # Returns
/// The payload, or None if the buffer is not a complete WAV file
pub fn extract_payload(wav_data: &[u8]) -> Option<&[u8]> {
    if !has_riff_header(wav_data) {
        return None;
    }
    chunks(wav_data)
        .find(|(id, _)| *id == b"data")
        .map(|(_, body)| body)
}

/// BLAKE3 hash of a WAV buffer's payload.
pub fn compute_payload_hash(wav_data: &[u8]) -> Option<String> {
    extract_payload(wav_data).map(|payload| blake3::hash(payload).to_hex().to_string())
}
