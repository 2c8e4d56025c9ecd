//! RIFF/WAVE container support.
//!
//! The writer emits the header once, up front, from sizes computed before
//! generation starts; the payload is streamed after it. The reader recovers
//! the header fields and payload for verification.

mod format;
mod reader;
mod writer;


pub use format::{
    WavFormat, WavHeader, FACT_CHUNK_SIZE, FMT_CHUNK_SIZE, WAVE_FORMAT_IEEE_FLOAT, WAVE_FORMAT_PCM,
};
pub use reader::{compute_payload_hash, extract_payload, read_format, WavInfo};
pub use writer::{header_to_vec, write_header};
